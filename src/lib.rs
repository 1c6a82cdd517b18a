//! Address Book - an in-memory contact directory with validated phone numbers.
//!
//! Contacts are stored as [`Record`]s, each holding a name and an ordered list
//! of ten-digit phone numbers. The [`AddressBook`] maps names to records.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `PhoneNumber`)
//! - **models**: The `Record` type and its phone operations
//! - **address_book**: The name-keyed directory of records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **logging**: Optional `tracing` subscriber setup for host applications
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut alice = Record::new("Alice").unwrap();
//! alice.add_phone("123-456-7890").unwrap();
//! assert!(alice.add_phone("12345").is_err());
//!
//! let mut book = AddressBook::new();
//! book.add_record(alice);
//!
//! let mut alice = book.find_mut("Alice").unwrap();
//! assert!(alice.edit_phone("1234567890", "0987654321").unwrap());
//! assert_eq!(alice.to_string(), "Contact name: Alice, phones: 0987654321");
//! ```

pub mod address_book;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;

pub use address_book::{AddressBook, RecordMut};
pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ConfigResult, ValidationResult};
pub use logging::init_logging;
pub use models::Record;
