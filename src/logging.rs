//! Tracing setup.
//!
//! `RUST_LOG` takes precedence over the configured level:
//!
//!   RUST_LOG=shopfront=debug shopfront

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Build the filter: `RUST_LOG` if set and valid, else `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber.
pub fn init_tracing(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        // Another test may already have installed a subscriber.
        let _ = init_tracing("debug");
        let err = init_tracing("debug").unwrap_err();
        assert!(matches!(err, Error::Logging(_)));
    }
}
