//! User settings.
//!
//! Settings are stored as JSON in the platform config directory, e.g.
//! `~/.config/shopfront/settings.json` on Linux. A missing file means
//! defaults; missing fields take their default values.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ui::ThemeMode;

const SETTINGS_FILE: &str = "settings.json";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color scheme.
    pub theme: ThemeMode,
    /// Literal prefix shown before prices.
    pub currency_label: String,
    /// Initial window width in pixels.
    pub window_width: f32,
    /// Initial window height in pixels.
    pub window_height: f32,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            currency_label: "₹".to_string(),
            window_width: 960.0,
            window_height: 640.0,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Default settings file location.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("dev", "shopfront", "shopfront")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Record `mode` and write the settings to `path`.
    pub fn persist_theme(&mut self, mode: ThemeMode, path: &Path) -> Result<(), ConfigError> {
        self.theme = mode;
        self.save_to(path)
    }

    /// Write to `path` as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }
}
