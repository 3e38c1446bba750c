use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tui-carousel/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tui-carousel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error and yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The autoplay interval is at least one millisecond
    /// - The swipe threshold is a positive finite number
    /// - The cell width is a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay.interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "autoplay.interval_ms must be greater than zero".to_string(),
            });
        }

        let threshold = self.gesture.swipe_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!("gesture.swipe_threshold must be positive, got {}", threshold),
            });
        }

        let cell_width = self.gesture.cell_width;
        if !cell_width.is_finite() || cell_width <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!("gesture.cell_width must be positive, got {}", cell_width),
            });
        }

        Ok(())
    }
}
