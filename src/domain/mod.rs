//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names and phone
//! numbers. These value objects validate at construction time, so an invalid
//! name or a phone number with the wrong digit count can never be stored.

pub mod contact_name;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::{normalize_digits, PhoneNumber, PHONE_DIGITS};
