//! Data models for the address book.
//!
//! This module contains the data structures representing a single contact
//! ([`Record`]) and the keyed collection of all contacts ([`AddressBook`]).

pub mod book;
pub mod record;

pub use book::AddressBook;
pub use record::Record;
