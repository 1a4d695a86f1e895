//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` output of each variant is the exact line shown to the
/// user when the corresponding field fails to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 decimal digits.
    InvalidPhone(String),

    /// The provided birthday is not a real DD.MM.YYYY calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => {
                write!(f, "Invalid phone number format. Must be 10 digits.")
            }
            Self::InvalidBirthday(_) => {
                write!(f, "Invalid birthday format. Use DD.MM.YYYY.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
