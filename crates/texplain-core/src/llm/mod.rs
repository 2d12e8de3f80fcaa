//! LLM integration for equation explanations.
//!
//! Provides a provider abstraction over chat-completion backends and the
//! Cerebras implementation used by default.

pub(crate) mod cerebras;
pub(crate) mod provider;

pub use cerebras::CerebrasProvider;
pub use provider::{LlmProvider, LlmProviderFactory, LlmRequest, LlmResponse};
