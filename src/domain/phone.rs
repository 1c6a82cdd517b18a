//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits every stored phone number carries.
pub const PHONE_DIGITS: usize = 10;

/// Strip every character that is not an ASCII decimal digit.
///
/// Used both to validate new phone numbers and to build search keys, so
/// `"+1 (555) 123-4567"` and `"15551234567"` normalize identically.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A type-safe wrapper for phone numbers.
///
/// A `PhoneNumber` always holds exactly ten decimal digits. Formatting
/// characters in the input are discarded at construction time and are not
/// preserved, so equality and hashing operate on the normalized digits.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from raw input.
    ///
    /// # Validation Rules
    ///
    /// - All non-digit characters are removed
    /// - Exactly 10 digits must remain
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if the digit count is not 10.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let digits = normalize_digits(raw);

        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhoneFormat {
                input: raw.to_string(),
                digits: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Get the normalized digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
