//! One handler per user command.
//!
//! Handlers orchestrate model operations and produce the reply text; every
//! failure comes back as a [`CommandError`] and is rendered at the dispatch
//! boundary. A handler either fully succeeds or leaves the book untouched:
//! fields validate before any record is inserted.

use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Split `args` into exactly the two tokens a command needs.
fn two_args<'a>(args: &'a str, message: &'static str) -> CommandResult<(&'a str, &'a str)> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(CommandError::MissingArgs(message)),
    }
}

/// `add <name> <phone>`: create (or overwrite) a contact with one phone.
pub(super) fn add_contact(book: &mut AddressBook, args: &str) -> CommandResult<String> {
    let (name, phone) = two_args(args, "Please provide a name and phone number.")?;

    // The record is discarded if the phone fails to validate.
    let mut record = Record::new(name);
    record.add_phone(phone)?;
    book.add_record(record);

    Ok("Contact added.".to_string())
}

/// `change <name> <new-phone>`: replace the contact's first phone.
pub(super) fn change_contact(book: &mut AddressBook, args: &str) -> CommandResult<String> {
    let (name, new_phone) = two_args(args, "Please provide a name and new phone number.")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;

    let old_phone = match record.phones().first() {
        Some(phone) => phone.as_str().to_string(),
        None => return Err(CommandError::NoPhoneToChange),
    };

    record.edit_phone(&old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: show one contact's display line.
pub(super) fn show_phone(book: &AddressBook, args: &str) -> CommandResult<String> {
    let name = args.trim();
    if name.is_empty() {
        return Err(CommandError::MissingArgs("Please provide a username."));
    }

    let record = book
        .find(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;

    Ok(record.to_string())
}

/// `all`: show every contact, one line per record.
pub(super) fn show_all(book: &AddressBook) -> String {
    book.to_string()
}

/// `add-birthday <name> <date>`: set the contact's birthday.
pub(super) fn add_birthday(book: &mut AddressBook, args: &str) -> CommandResult<String> {
    let (name, birthday) = two_args(args, "Missing arguments.")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;

    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: show the stored DD.MM.YYYY text.
pub(super) fn show_birthday(book: &AddressBook, args: &str) -> CommandResult<String> {
    let name = args.trim();
    if name.is_empty() {
        return Err(CommandError::MissingArgs("Please provide a name to search."));
    }

    let record = book
        .find(name)
        .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;

    match record.birthday() {
        Some(birthday) => Ok(format!("Birthday: {}", birthday)),
        None => Ok("Birthday not set.".to_string()),
    }
}

/// `birthdays`: names with a birthday in the next seven days.
pub(super) fn show_birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        "No birthdays next week.".to_string()
    } else {
        upcoming.join("\n")
    }
}
