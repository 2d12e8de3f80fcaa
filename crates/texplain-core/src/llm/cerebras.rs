//! Cerebras provider using its OpenAI-compatible Chat Completions API.
//!
//! Plain text messages only; the explanation is the first choice's content.

use super::provider::{LlmProvider, LlmRequest, LlmResponse};
use crate::credentials::Credential;
use crate::error::ExplainError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Cerebras chat-completions provider.
pub struct CerebrasProvider {
    credential: Credential,
    model: String,
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl CerebrasProvider {
    /// `endpoint` is the API base URL, e.g. `https://api.cerebras.ai/v1`.
    pub fn new(endpoint: &str, credential: Credential, model: &str, timeout: Duration) -> Self {
        Self {
            credential,
            model: model.to_string(),
            client: reqwest::Client::new(),
            endpoint: format!("{}/chat/completions", endpoint.trim_end_matches('/')),
            timeout,
        }
    }

    fn build_body(&self, request: &LlmRequest) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        });

        ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream: false,
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    model: String,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

impl ChatResponse {
    fn into_response(self, latency_ms: u64) -> Result<LlmResponse, ExplainError> {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ExplainError::EmptyResponse)?;

        Ok(LlmResponse {
            text,
            model: self.model,
            tokens_used: self.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }
}

#[async_trait]
impl LlmProvider for CerebrasProvider {
    fn name(&self) -> &str {
        "cerebras"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, ExplainError> {
        let start = Instant::now();
        let body = self.build_body(request);

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            max_tokens = request.max_tokens,
            "Sending chat completion request"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose())
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ExplainError::Request {
                message: format!("Cerebras HTTP {status}: {}", text.trim()),
                status_code: Some(status.as_u16()),
            });
        }

        let chat_resp: ChatResponse = resp.json().await.map_err(|e| ExplainError::Request {
            message: format!("Failed to parse Cerebras response: {e}"),
            status_code: None,
        })?;

        let response = chat_resp.into_response(start.elapsed().as_millis() as u64)?;
        tracing::debug!(
            model = %response.model,
            tokens_used = ?response.tokens_used,
            latency_ms = response.latency_ms,
            "Chat completion received"
        );
        Ok(response)
    }
}

impl CerebrasProvider {
    fn transport_error(&self, e: reqwest::Error) -> ExplainError {
        if e.is_timeout() {
            ExplainError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            ExplainError::Request {
                message: format!("Cerebras request failed: {e}"),
                status_code: None,
            }
        }
    }
}
