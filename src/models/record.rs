//! Record model representing one contact in the address book.

use crate::domain::{normalize_digits, ContactName, PhoneNumber};
use crate::error::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: an immutable name plus an ordered list of phone numbers.
///
/// Phones keep insertion order and duplicates are allowed. Lookup, removal
/// and editing always act on the first phone whose digits match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, fixed at construction
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a new record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// No duplicate check is made; the same number may be stored twice.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `raw` does not contain
    /// exactly 10 digits. The record is left unchanged in that case.
    pub fn add_phone(&mut self, raw: &str) -> ValidationResult<()> {
        let phone = PhoneNumber::new(raw).map_err(|e| {
            tracing::debug!(contact = %self.name, error = %e, "Rejected phone number");
            e
        })?;

        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone whose digits equal the digits of `raw`.
    ///
    /// The search key is normalized but not length-checked, so a malformed
    /// key simply finds nothing.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.position(raw).map(|idx| &self.phones[idx])
    }

    /// Remove the first phone matching `raw`. Returns `false` if none matched.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.position(raw) {
            Some(idx) => {
                let removed = self.phones.remove(idx);
                tracing::debug!(contact = %self.name, phone = %removed, "Phone removed");
                true
            }
            None => false,
        }
    }

    /// Replace the first phone matching `old_raw` with `new_raw`, in place.
    ///
    /// Returns `Ok(false)` when `old_raw` is not found; `new_raw` is not
    /// validated in that case.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if a match exists but
    /// `new_raw` is invalid. The record is left unchanged.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> ValidationResult<bool> {
        let Some(idx) = self.position(old_raw) else {
            return Ok(false);
        };

        let replacement = PhoneNumber::new(new_raw).map_err(|e| {
            tracing::debug!(contact = %self.name, error = %e, "Rejected replacement phone");
            e
        })?;
        tracing::debug!(
            contact = %self.name,
            old = %self.phones[idx],
            new = %replacement,
            "Phone edited"
        );
        self.phones[idx] = replacement;
        Ok(true)
    }

    fn position(&self, raw: &str) -> Option<usize> {
        let key = normalize_digits(raw);
        self.phones.iter().position(|p| p.as_str() == key)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
