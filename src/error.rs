//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every user-visible failure is rendered from an error's `Display` output at
//! the command-dispatch boundary; nothing here propagates far enough to crash
//! the process.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book and record operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// No record exists under the given name
    #[error("Contact not found.")]
    RecordNotFound(String),

    /// The record has no phone equal to the one being edited
    #[error("Phone number not found.")]
    PhoneNotFound(String),

    /// A field failed validation while mutating a record
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors surfaced by command handlers.
///
/// The dispatch loop converts these to a single printed line via `Display`.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An address book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// The command line had too few tokens; the message is command-specific
    #[error("{0}")]
    MissingArgs(&'static str),

    /// `change` was asked to edit a record with an empty phone list
    #[error("No phone number to change.")]
    NoPhoneToChange,
}

/// Errors that can occur while reading or writing the persisted book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
