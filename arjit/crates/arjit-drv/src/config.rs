//! Configuration module for the arjit driver.
//!
//! This module handles loading and saving `arjit.toml`.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DrvError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "arjit.toml";

/// Driver configuration.
///
/// Command-line flags take precedence over every value here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lex: LexConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Error stance, `strict` or `lenient`.
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Append a trailing `EOF` token.
    #[serde(default)]
    pub emit_eof: bool,
}

/// Output configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Token output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_mode() -> String {
    "strict".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            emit_eof: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/arjit/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DrvError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| DrvError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("arjit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("arjit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
