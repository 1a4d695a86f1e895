//! Persistence for the address book.
//!
//! The whole book is written as one JSON document; the on-disk value is the
//! ordered record list, so load-then-save is the identity. A missing, empty,
//! or corrupt file is not an error on load: the assistant starts with an
//! empty book instead.

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load the address book from `path`, degrading to an empty book when the
/// file is missing, empty, or unreadable as a book.
pub fn load(path: impl AsRef<Path>) -> AddressBook {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("no readable book at {}: {e}; starting empty", path.display());
            return AddressBook::new();
        }
    };

    if contents.trim().is_empty() {
        debug!("empty book file at {}; starting empty", path.display());
        return AddressBook::new();
    }

    match serde_json::from_str(&contents) {
        Ok(book) => book,
        Err(e) => {
            warn!(
                "could not parse book at {}: {e}; starting empty",
                path.display()
            );
            AddressBook::new()
        }
    }
}

/// Write the whole book to `path`, overwriting any previous content.
pub fn save(path: impl AsRef<Path>, book: &AddressBook) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;
    fs::write(path, json)?;
    Ok(())
}
