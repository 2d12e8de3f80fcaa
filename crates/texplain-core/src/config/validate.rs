//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recognizer.program.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "recognizer.program must not be empty".into(),
            ));
        }
        if self.recognizer.timeout_ms == Some(0) {
            return Err(ConfigError::ValidationError(
                "recognizer.timeout_ms must be > 0".into(),
            ));
        }
        if !(self.llm.endpoint.starts_with("http://") || self.llm.endpoint.starts_with("https://"))
        {
            return Err(ConfigError::ValidationError(format!(
                "llm.endpoint must be an http(s) URL, got '{}'",
                self.llm.endpoint
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "llm.model must not be empty".into(),
            ));
        }
        if self.llm.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "llm.max_tokens must be > 0".into(),
            ));
        }
        if self.llm.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "llm.timeout_ms must be > 0".into(),
            ));
        }
        if let Some(t) = self.llm.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::ValidationError(
                    "llm.temperature must be between 0.0 and 2.0".into(),
                ));
            }
        }
        Ok(())
    }
}
