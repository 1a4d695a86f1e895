//! Integration tests for the persistence layer: save/load identity and the
//! degrade-to-empty behavior for missing, empty, and corrupt files.

use contact_assistant::{storage, AddressBook, Record};
use std::fs;
use tempfile::tempdir;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890").unwrap();
    john.add_phone("1234567890").unwrap(); // duplicates survive the disk
    john.add_birthday("01.01.1990").unwrap();
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("0987654321").unwrap();
    book.add_record(jane);

    book.add_record(Record::new("Empty"));
    book
}

/// Save then load yields a book with identical names, phones, and birthdays,
/// in the same order.
#[test]
fn save_then_load_is_identity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");

    let book = sample_book();
    storage::save(&path, &book).unwrap();
    let loaded = storage::load(&path);

    assert_eq!(loaded, book);
    let names: Vec<&str> = loaded.iter().map(|r| r.name()).collect();
    assert_eq!(names, ["John", "Jane", "Empty"]);
    assert_eq!(loaded.find("John").unwrap().phones().len(), 2);
    assert_eq!(
        loaded.find("John").unwrap().birthday().unwrap().as_str(),
        "01.01.1990"
    );
}

/// A second save fully overwrites the previous content.
#[test]
fn save_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");

    storage::save(&path, &sample_book()).unwrap();

    let mut smaller = AddressBook::new();
    let mut only = Record::new("Only");
    only.add_phone("5555555555").unwrap();
    smaller.add_record(only);
    storage::save(&path, &smaller).unwrap();

    let loaded = storage::load(&path);
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find("John").is_none());
    assert!(loaded.find("Only").is_some());
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempdir().unwrap();
    let book = storage::load(dir.path().join("does_not_exist.json"));
    assert!(book.is_empty());
}

#[test]
fn empty_file_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, "").unwrap();

    assert!(storage::load(&path).is_empty());
}

#[test]
fn corrupt_file_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, "this is not json{{{").unwrap();

    assert!(storage::load(&path).is_empty());
}

/// A structurally valid file holding an invalid field (9-digit phone) is
/// corrupt as far as the book is concerned: validation runs on load.
#[test]
fn invalid_field_on_disk_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, r#"[{"name":"John","phones":["123456789"]}]"#).unwrap();

    assert!(storage::load(&path).is_empty());
}
