//! AddressBook model: the keyed collection of all records.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days covered by the upcoming-birthday window, today included.
const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// An ordered mapping from contact name to [`Record`].
///
/// Backed by a `Vec` so iteration follows insertion order and overwriting a
/// name keeps its original position. Names are unique: `add_record` is the
/// only way in and it replaces any record with the same name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    ///
    /// Last write wins; no merge. A replaced record keeps its position in
    /// iteration order.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by name. Absence is not an error; callers decide
    /// what "not found" means.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove the record with the given name.
    ///
    /// # Errors
    ///
    /// `BookError::RecordNotFound` if no record carries that name.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        match self.records.iter().position(|r| r.name() == name) {
            Some(index) => {
                self.records.remove(index);
                Ok(())
            }
            None => Err(BookError::RecordNotFound(name.to_string())),
        }
    }

    /// Names of contacts whose birthday falls within the next seven days,
    /// today included, in book iteration order.
    ///
    /// Each stored birthday is re-anchored to `today`'s year before the
    /// comparison; a birthday that already passed this year is never
    /// reported, even when it falls within the window after New Year.
    /// Feb 29 birthdays are skipped in non-leap years (the re-anchored
    /// date does not exist).
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<String> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(anchored) = birthday.date().with_year(today.year()) else {
                continue;
            };

            let delta_days = (anchored - today).num_days();
            if (0..BIRTHDAY_WINDOW_DAYS).contains(&delta_days) {
                upcoming.push(record.name().to_string());
            }
        }

        upcoming
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phone(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(phone).unwrap();
        record
    }

    fn record_with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(name);
        record.add_birthday(birthday).unwrap();
        record
    }

    fn june_first_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));

        let record = book.find("John").unwrap();
        assert!(record.phones().iter().any(|p| p.as_str() == "1234567890"));
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.add_record(record_with_phone("Jane", "1111111111"));
        book.add_record(record_with_phone("John", "0987654321"));

        // Last write wins, position kept, no growth
        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["John", "Jane"]);
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "0987654321");
    }

    #[test]
    fn test_delete_existing() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));

        book.delete("John").unwrap();
        assert!(book.find("John").is_none());
        assert!(book.is_empty());
        assert_eq!(book.to_string(), "");
    }

    #[test]
    fn test_delete_missing_fails() {
        let mut book = AddressBook::new();
        let err = book.delete("Nobody").unwrap_err();
        assert_eq!(err.to_string(), "Contact not found.");
    }

    #[test]
    fn test_upcoming_birthdays_window() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Today", "01.06.1990"));
        book.add_record(record_with_birthday("InThree", "03.06.1990"));
        book.add_record(record_with_birthday("InSix", "07.06.1985"));
        book.add_record(record_with_birthday("InNine", "10.06.1990"));
        book.add_record(record_with_birthday("Yesterday", "31.05.1990"));
        book.add_record(record_with_phone("NoBirthday", "1234567890"));

        let upcoming = book.upcoming_birthdays(june_first_2024());
        assert_eq!(upcoming, ["Today", "InThree", "InSix"]);
    }

    #[test]
    fn test_upcoming_birthdays_no_year_wrap() {
        // Dec 30 birthday checked on Dec 28: in the window.
        // Jan 2 birthday checked on Dec 28: already anchored to the past,
        // never reported.
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("December", "30.12.1990"));
        book.add_record(record_with_birthday("January", "02.01.1990"));

        let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        assert_eq!(book.upcoming_birthdays(today), ["December"]);
    }

    #[test]
    fn test_upcoming_birthdays_skips_leap_day_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Leap", "29.02.2000"));

        let common_year = NaiveDate::from_ymd_opt(2023, 2, 25).unwrap();
        assert!(book.upcoming_birthdays(common_year).is_empty());

        let leap_year = NaiveDate::from_ymd_opt(2024, 2, 25).unwrap();
        assert_eq!(book.upcoming_birthdays(leap_year), ["Leap"]);
    }

    #[test]
    fn test_display_in_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("Zed", "1234567890"));
        book.add_record(record_with_phone("Amy", "0987654321"));

        assert_eq!(
            book.to_string(),
            "Contact name: Zed, phones: 1234567890\nContact name: Amy, phones: 0987654321"
        );
    }

    #[test]
    fn test_book_serialization_round_trip() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.add_record(record_with_birthday("Jane", "01.01.1990"));

        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);

        let names: Vec<&str> = back.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["John", "Jane"]);
    }
}
