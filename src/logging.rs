//! Logging setup for applications embedding the address book.
//!
//! The library only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber, either its own or the one built here.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber configured from `config`.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// ```no_run
/// use address_book::{init_logging, Config};
///
/// init_logging(&Config::from_env().unwrap_or_default());
/// ```
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("address_book={}", config.log_level)));

    // Ignore the error if a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.log_targets)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let config = Config {
            log_level: "debug".to_string(),
            log_targets: true,
        };
        init_logging(&config);
        init_logging(&Config::default());

        tracing::debug!("logging initialized twice without panicking");
    }
}
