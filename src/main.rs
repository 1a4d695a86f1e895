//! Contact assistant - main entry point.
//!
//! Loads the persisted address book, runs the command loop over stdin, and
//! saves the book back on `close`/`exit`.

use anyhow::Result;
use contact_assistant::{repl, storage, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Loading address book from {}", config.data_file);
    let mut book = storage::load(&config.data_file);
    info!("Loaded {} contacts", book.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut book, stdin.lock(), stdout.lock())?;

    // A failed save is reported but never changes the exit code; the
    // session itself completed.
    if let Err(e) = storage::save(&config.data_file, &book) {
        error!("Failed to save address book to {}: {}", config.data_file, e);
    } else {
        info!("Saved {} contacts to {}", book.len(), config.data_file);
    }

    Ok(())
}
