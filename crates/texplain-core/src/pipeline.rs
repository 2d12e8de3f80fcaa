//! The two-step pipeline: recognize the equation, then ask for an explanation.
//!
//! ```text
//! image path → recognizer (child process) → LaTeX → chat completion → explanation
//! ```
//!
//! Steps run one after the other; nothing is retried or cached.

use crate::config::{Config, LlmConfig};
use crate::credentials::Credential;
use crate::error::Result;
use crate::llm::{LlmProvider, LlmProviderFactory, LlmRequest};
use crate::recognizer::Recognizer;
use std::path::Path;

pub struct Pipeline {
    recognizer: Recognizer,
    provider: Box<dyn LlmProvider>,
    max_tokens: u32,
    temperature: Option<f32>,
    system_prompt: Option<String>,
}

impl Pipeline {
    /// Assemble a pipeline from explicit parts. Request settings come from `llm`.
    pub fn new(recognizer: Recognizer, provider: Box<dyn LlmProvider>, llm: &LlmConfig) -> Self {
        Self {
            recognizer,
            provider,
            max_tokens: llm.max_tokens,
            temperature: llm.temperature,
            system_prompt: llm.system_prompt.clone(),
        }
    }

    /// Build the configured recognizer and provider.
    pub fn from_config(
        config: &Config,
        credential: Credential,
        model_override: Option<&str>,
    ) -> Result<Self> {
        let recognizer = Recognizer::new(&config.recognizer);
        let provider = LlmProviderFactory::create(&config.llm, credential, model_override)?;
        Ok(Self::new(recognizer, provider, &config.llm))
    }

    /// Model that will be asked for the explanation.
    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Run the recognizer on `image` and return the LaTeX it produced.
    pub async fn recognize(&self, image: &Path) -> Result<String> {
        let latex = self.recognizer.recognize(image).await?;
        tracing::info!(chars = latex.len(), "Recognized equation");
        Ok(latex)
    }

    /// Ask the provider to explain `latex`.
    pub async fn explain(&self, latex: &str) -> Result<String> {
        let request = LlmRequest::explain_equation(latex, self.max_tokens)
            .with_system_prompt(self.system_prompt.clone())
            .with_temperature(self.temperature);

        let response = self.provider.generate(&request).await?;
        tracing::info!(
            provider = self.provider.name(),
            model = %response.model,
            latency_ms = response.latency_ms,
            "Explanation received"
        );
        Ok(response.text)
    }
}
