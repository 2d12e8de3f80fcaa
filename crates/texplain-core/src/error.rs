//! Error types for texplain.
//!
//! Errors are organized by stage (configuration, recognition, explanation) so
//! the CLI can report every failure with the same clear, actionable message.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for texplain operations.
#[derive(Error, Debug)]
pub enum TexplainError {
    /// Configuration or credential errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The external recognizer failed
    #[error("{0}")]
    Recognize(#[from] RecognizeError),

    /// The explanation request failed
    #[error("Error asking for an explanation: {0}")]
    Explain(#[from] ExplainError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// The credential file exists but could not be loaded
    #[error("Failed to load {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    /// No API key in the credential file or the environment
    #[error("Error: No API key found in {env_file} (set {var}).")]
    MissingCredential { var: String, env_file: PathBuf },

    /// Provider name not recognized
    #[error("Unknown LLM provider: {0}")]
    UnknownProvider(String),
}

/// Errors from running the external image-to-LaTeX recognizer.
#[derive(Error, Debug)]
pub enum RecognizeError {
    /// The recognizer program could not be started
    #[error("Error converting image to LaTeX: could not run '{program}': {source}. Is it installed and on PATH?")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The recognizer exited with a non-zero status
    #[error("Error converting image to LaTeX: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    /// The recognizer did not finish in time
    #[error("Error converting image to LaTeX: '{program}' timed out after {timeout_ms}ms")]
    Timeout { program: String, timeout_ms: u64 },
}

/// Errors from the remote chat-completion call.
#[derive(Error, Debug)]
pub enum ExplainError {
    /// Transport, HTTP status or response parsing failure
    #[error("{message}")]
    Request {
        message: String,
        status_code: Option<u16>,
    },

    /// The API answered but returned no text
    #[error("model returned no content")]
    EmptyResponse,

    /// The request did not complete in time
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// Convenience type alias for texplain results.
pub type Result<T> = std::result::Result<T, TexplainError>;
