//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Lookups that find nothing are not errors; they are reported through `Option` and
//! `bool` results on the operations themselves.

use thiserror::Error;

pub use crate::domain::ValidationError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
