//! Error types.
//!
//! The catalog and filter code cannot fail. Errors only come from the
//! ambient layers: reading settings and installing the log subscriber.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the settings file failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid JSON for [`Settings`](crate::config::Settings).
    #[error("invalid settings in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No platform config directory could be determined.
    #[error("unable to determine a config directory for this platform")]
    NoConfigDir,
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
