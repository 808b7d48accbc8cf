//! Configuration management for the idlview CLI
//!
//! Config is stored at ~/.config/idlview/config.toml

use crate::error::{ViewerError, ViewerResult};
use crate::idl::DEFAULT_HTTP_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config directory name
const CONFIG_DIR: &str = "idlview";

/// Config file name
const CONFIG_FILE: &str = "config.toml";

/// idlview configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Print doc comments under entities and fields
    #[serde(default = "default_true")]
    pub show_docs: bool,

    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Timeout for fetching IDLs by URL
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_docs: true,
            color: true,
            http_timeout_secs: default_http_timeout(),
        }
    }
}

impl Config {
    /// Get the config directory path (~/.config/idlview/)
    pub fn dir_path() -> ViewerResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR))
            .ok_or_else(|| ViewerError::ConfigError("Could not determine config directory".into()))
    }

    /// Get the config file path (~/.config/idlview/config.toml)
    pub fn file_path() -> ViewerResult<PathBuf> {
        Self::dir_path().map(|p| p.join(CONFIG_FILE))
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::file_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load config from the default location
    pub fn load() -> ViewerResult<Self> {
        Self::load_from(&Self::file_path()?)
    }

    /// Load config from `path`, returning defaults if the file doesn't exist
    pub fn load_from(path: &Path) -> ViewerResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ViewerError::ConfigError(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Load config from the default location and reject invalid values
    pub fn load_validated() -> ViewerResult<Self> {
        Self::load_validated_from(&Self::file_path()?)
    }

    /// Load config from `path` and reject invalid values
    pub fn load_validated_from(path: &Path) -> ViewerResult<Self> {
        let config = Self::load_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> ViewerResult<()> {
        self.save_to(&Self::file_path()?)
    }

    /// Save config to `path`, creating directories if needed
    pub fn save_to(&self, path: &Path) -> ViewerResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;

        Ok(())
    }

    /// Validate the config values
    pub fn validate(&self) -> ViewerResult<()> {
        if self.http_timeout_secs == 0 {
            return Err(ViewerError::ConfigError(
                "HTTP timeout must be at least 1 second".into(),
            ));
        }

        Ok(())
    }
}
