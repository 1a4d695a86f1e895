//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// chrono's %d/%m accept one-digit fields, so the fixed widths are checked
// up front.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("birthday pattern is valid"));

/// A type-safe wrapper for birthdays in `DD.MM.YYYY` form.
///
/// Validated at construction time: the text must match the fixed pattern
/// (two-digit day, two-digit month, four-digit year) and denote a real
/// calendar date. Both the original text (for display) and the parsed date
/// (for window arithmetic) are kept.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("01.01.1990").unwrap();
/// assert_eq!(birthday.as_str(), "01.01.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not
    /// match `DD.MM.YYYY` or does not denote a real calendar date
    /// (e.g. `31.02.2024`).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !BIRTHDAY_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidBirthday(value));
        }

        let date = NaiveDate::parse_from_str(&value, "%d.%m.%Y")
            .map_err(|_| ValidationError::InvalidBirthday(value.clone()))?;

        Ok(Self { value, date })
    }

    /// Get the original `DD.MM.YYYY` text.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// Serde support - serialize as the original string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
