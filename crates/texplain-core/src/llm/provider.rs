//! LLM provider trait and request/response types.
//!
//! Defines the interface that chat-completion providers implement, plus the
//! factory that creates the configured provider from config and a credential.

use crate::config::LlmConfig;
use crate::credentials::Credential;
use crate::error::{ConfigError, ExplainError};
use async_trait::async_trait;
use std::time::Duration;

/// A single chat-completion request.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// User message
    pub prompt: String,
    /// Optional system message sent before the prompt
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,
}

impl LlmRequest {
    /// Build the request asking the model to explain a LaTeX equation.
    pub fn explain_equation(latex: &str, max_tokens: u32) -> Self {
        Self {
            prompt: format!("Explain this equation to me:\n\n{latex}"),
            system_prompt: None,
            max_tokens,
            temperature: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.system_prompt = system_prompt;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

/// The response from a chat-completion call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Generated text
    pub text: String,
    /// Model identifier reported by the API
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that all LLM providers implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn LlmProvider>` for dynamic dispatch).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging (e.g., "cerebras").
    fn name(&self) -> &str;

    /// Model the provider sends requests to.
    fn model(&self) -> &str;

    /// Send one request and return the first completion.
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, ExplainError>;
}

/// Factory that creates the configured provider.
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create an LLM provider from config and an already-loaded credential.
    ///
    /// # Arguments
    /// * `config` - The LLM config section
    /// * `credential` - API key, resolved at startup
    /// * `model_override` - Optional model name that overrides the config default
    pub fn create(
        config: &LlmConfig,
        credential: Credential,
        model_override: Option<&str>,
    ) -> Result<Box<dyn LlmProvider>, ConfigError> {
        let model = model_override.unwrap_or(&config.model);
        let timeout = Duration::from_millis(config.timeout_ms);
        match config.provider.as_str() {
            "cerebras" => Ok(Box::new(super::cerebras::CerebrasProvider::new(
                &config.endpoint,
                credential,
                model,
                timeout,
            ))),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}
