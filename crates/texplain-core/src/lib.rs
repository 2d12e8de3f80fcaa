//! texplain core - equation image to LaTeX to plain-language explanation.
//!
//! Two external calls joined by a little string handling:
//!
//! ```text
//! Image → pix2tex (child process) → LaTeX → Cerebras chat completion → Explanation
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use texplain_core::{Config, Credential, Pipeline};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> texplain_core::Result<()> {
//!     let config = Config::load()?;
//!     let credential = Credential::load(&config)?;
//!     let pipeline = Pipeline::from_config(&config, credential, None)?;
//!
//!     let latex = pipeline.recognize("./equation.png".as_ref()).await?;
//!     println!("{}", pipeline.explain(&latex).await?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod recognizer;

pub use config::Config;
pub use credentials::Credential;
pub use error::{ConfigError, ExplainError, RecognizeError, Result, TexplainError};
pub use llm::{LlmProvider, LlmProviderFactory, LlmRequest, LlmResponse};
pub use pipeline::Pipeline;
pub use recognizer::{extract_latex, Recognizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
