//! Record model representing one contact.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact's full state: a name, an ordered list of phone numbers, and
/// at most one birthday.
///
/// The name is free-form and set once at creation. Phones keep insertion
/// order and may contain duplicates. The birthday slot is absent until set
/// and overwritten on re-set. All mutation goes through the methods here so
/// only validated values ever reach the lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Duplicates are accepted; the list keeps every value in insertion
    /// order.
    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `value`.
    ///
    /// A value that matches nothing is a no-op, not an error.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Validate `new` and replace the first phone equal to `old` in place.
    ///
    /// # Errors
    ///
    /// `BookError::Validation` if `new` is not a valid phone number,
    /// `BookError::PhoneNotFound` if no phone equals `old`. Validation runs
    /// first, so a bad replacement never consumes the lookup.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;

        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                *phone = replacement;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old.to_string())),
        }
    }

    /// Validate and set the birthday, overwriting any previous value.
    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        let birthday = Birthday::new(value)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;

        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }

        Ok(())
    }
}
