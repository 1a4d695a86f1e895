//! Contact assistant - a line-oriented bot for address book management.
//!
//! Stores contact names, 10-digit phone numbers, and birthdays; persists
//! the book to a JSON file; and answers simple queries (lookup, list,
//! birthdays in the coming week) over a blocking command loop.
//!
//! # Architecture
//!
//! - **domain**: validated field value objects (phone numbers, birthdays)
//! - **models**: the [`Record`] and [`AddressBook`] data model
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **storage**: JSON persistence for the whole book
//! - **commands**: line parsing, handlers, and the error-to-message boundary
//! - **repl**: the blocking read-eval-print loop

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use commands::{dispatch, parse_input, Flow};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
