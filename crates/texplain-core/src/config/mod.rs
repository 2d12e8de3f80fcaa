//! Configuration management for texplain.
//!
//! Configuration is loaded from a TOML file in the platform config directory
//! with defaults for every value, so running without a file talks to Cerebras
//! through `pix2tex` exactly as a bare install expects.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credential source
    pub credentials: CredentialsConfig,

    /// External recognizer settings
    pub recognizer: RecognizerConfig,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.texplain.texplain/config.toml
    /// - Linux: ~/.config/texplain/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\texplain\config\config.toml
    ///
    /// Falls back to ~/.texplain/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "texplain", "texplain")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".texplain").join("config.toml")
            })
    }

    /// Get the resolved credential file path (with ~ expansion).
    pub fn env_file(&self) -> PathBuf {
        let path_str = self.credentials.env_file.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.into_owned())
    }
}
