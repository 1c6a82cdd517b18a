//! Configuration management for the address book.
//!
//! The address book itself has no tunables; configuration only covers how
//! embedding applications want logging set up. Values come from environment
//! variables, with an optional `.env` file loaded first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the address book's logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Include the event target in log lines (default: false)
    pub log_targets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: One of trace, debug, info, warn, error (default: "error")
    /// - `ADDRESS_BOOK_LOG_TARGETS`: `true` or `false` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout and a missing file is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL")
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_else(|_| "error".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        let log_targets = Self::parse_env_bool("ADDRESS_BOOK_LOG_TARGETS", false)?;

        Ok(Config {
            log_level,
            log_targets,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            log_targets: false,
        }
    }
}
