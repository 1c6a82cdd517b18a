//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number does not normalize to exactly 10 digits.
    #[error("Invalid phone format: {input:?} has {digits} digits, expected exactly 10")]
    InvalidPhoneFormat {
        /// The raw input as given by the caller
        input: String,
        /// Number of decimal digits found in the input
        digits: usize,
    },
}
