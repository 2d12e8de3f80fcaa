//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the API credential comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Key/value file loaded into the environment before the key is resolved.
    /// Relative paths are resolved against the working directory.
    pub env_file: PathBuf,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from("api_key.env"),
        }
    }
}

/// External image-to-LaTeX recognizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Program to run
    pub program: String,

    /// Extra arguments placed before the image path
    pub args: Vec<String>,

    /// Kill the recognizer after this many milliseconds. No limit when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            program: "pix2tex".to_string(),
            args: Vec::new(),
            timeout_ms: None,
        }
    }
}

/// Chat-completion provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider identifier
    pub provider: String,

    /// API base URL (without the `/chat/completions` suffix)
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name
    pub model: String,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Sampling temperature; the API default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Optional system message sent ahead of the question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "cerebras".to_string(),
            endpoint: "https://api.cerebras.ai/v1".to_string(),
            api_key: "${CEREBRAS_API_KEY}".to_string(),
            model: "qwen-3-235b-a22b-instruct-2507".to_string(),
            max_tokens: 500,
            timeout_ms: 60000,
            temperature: None,
            system_prompt: None,
        }
    }
}

impl LlmConfig {
    /// Name of the environment variable referenced by `api_key`, if any.
    pub fn api_key_var(&self) -> Option<&str> {
        self.api_key
            .strip_prefix("${")
            .and_then(|rest| rest.strip_suffix('}'))
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
