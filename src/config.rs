//! Configuration management for the contact assistant.
//!
//! This module handles loading configuration from environment variables.
//! Everything is optional: with no environment at all the assistant keeps
//! its book next to the working directory and logs errors only.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default path of the persisted address book.
pub const DEFAULT_DATA_FILE: &str = "address_book.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book file
    pub data_file: String,

    /// Log level for diagnostics on stderr (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ABOOK_DATA_FILE`: path of the persisted book (default: `address_book.json`)
    /// - `ABOOK_LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file =
            env::var("ABOOK_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());

        if data_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ABOOK_DATA_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("ABOOK_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: DEFAULT_DATA_FILE.to_string(),
            log_level: "error".to_string(),
        }
    }
}
