//! Data models for the address book.
//!
//! A [`Record`] holds one contact's name and phone numbers; the
//! [`crate::AddressBook`] owns the records keyed by name.

pub mod record;

pub use record::Record;
