//! The address book: a mapping from contact name to [`Record`].
//!
//! The book owns its records outright. Callers insert whole records, look
//! them up by the exact name string and delete them by name. Inserting a
//! record whose name is already present replaces the old record.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::ValidationResult;
use crate::models::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

/// In-memory contact directory keyed by name.
///
/// Only the directory operations are exposed. Stored records can have their
/// phones edited through [`RecordMut`], but never be replaced in place, so the
/// key of every entry always equals the name of the record stored under it.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut bob = Record::new("Bob").unwrap();
/// bob.add_phone("111-111-1111").unwrap();
/// book.add_record(bob);
///
/// assert!(book.find("Bob").is_some());
/// assert!(book.delete("Bob"));
/// assert!(book.find("Bob").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!(contact = %name, "Existing record overwritten");
        } else {
            tracing::debug!(contact = %name, "Record added");
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for editing its phones.
    pub fn find_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        self.records.get_mut(name).map(|record| RecordMut { record })
    }

    /// Remove the record stored under `name`. Returns `false` if absent.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.records.remove(name).is_some();
        if removed {
            tracing::debug!(contact = %name, "Record deleted");
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contact names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over `(name, record)` pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Records in ascending name order.
    fn sorted_records(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        records
    }
}

/// Phone-editing view of a record stored in an [`AddressBook`].
///
/// The record's name and identity are fixed while it lives in the book;
/// only its phone list can change.
#[derive(Debug)]
pub struct RecordMut<'a> {
    record: &'a mut Record,
}

impl RecordMut<'_> {
    pub fn name(&self) -> &ContactName {
        self.record.name()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        self.record.phones()
    }

    /// See [`Record::add_phone`].
    pub fn add_phone(&mut self, raw: &str) -> ValidationResult<()> {
        self.record.add_phone(raw)
    }

    /// See [`Record::find_phone`].
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.record.find_phone(raw)
    }

    /// See [`Record::remove_phone`].
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        self.record.remove_phone(raw)
    }

    /// See [`Record::edit_phone`].
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> ValidationResult<bool> {
        self.record.edit_phone(old_raw, new_raw)
    }

    /// Read-only access to the whole record.
    pub fn as_record(&self) -> &Record {
        &*self.record
    }
}

impl fmt::Display for RecordMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.record, f)
    }
}

/// Iterator over the entries of an [`AddressBook`].
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, record)| (name.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

// Serde support - serialize as a list of records ordered by name
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.sorted_records())
    }
}

// Serde support - rebuild through add_record so later duplicates win
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.sorted_records().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
