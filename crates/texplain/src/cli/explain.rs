//! Recognize an equation image and print its explanation.

use anyhow::Context;
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use texplain_core::{Config, Credential, Pipeline};

/// Arguments for a run.
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Image of the equation to explain
    pub image: PathBuf,

    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "TEXPLAIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// File holding CEREBRAS_API_KEY=<key>
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Model name (overrides llm.model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Maximum tokens in the explanation (overrides llm.max_tokens)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Recognizer program (overrides recognizer.program)
    #[arg(long)]
    pub recognizer: Option<String>,
}

/// Apply CLI overrides, load the credential, and run the pipeline against stdout.
///
/// The credential is checked before the recognizer starts, so a missing key
/// fails without spawning anything.
pub async fn execute(args: ExplainArgs, mut config: Config) -> anyhow::Result<()> {
    apply_overrides(&args, &mut config)?;

    let credential = Credential::load(&config)?;
    let pipeline = Pipeline::from_config(&config, credential, None)?;

    let mut out = std::io::stdout();
    run(&pipeline, &args.image, &mut out).await
}

fn apply_overrides(args: &ExplainArgs, config: &mut Config) -> anyhow::Result<()> {
    if let Some(ref env_file) = args.env_file {
        config.credentials.env_file = env_file.clone();
    }
    if let Some(ref program) = args.recognizer {
        config.recognizer.program = program.clone();
        config.recognizer.args.clear();
    }
    if let Some(max_tokens) = args.max_tokens {
        config.llm.max_tokens = max_tokens;
    }
    if let Some(ref model) = args.model {
        config.llm.model = model.clone();
    }
    config.validate().context("Error: invalid command-line options")?;
    Ok(())
}

/// Recognize `image`, then explain it, printing progress and results to `out`.
pub async fn run<W: Write>(pipeline: &Pipeline, image: &Path, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "📄 Converting image to LaTeX...")?;
    out.flush()?;
    let latex = pipeline.recognize(image).await?;

    writeln!(out, "\n📄 LaTeX Output:\n")?;
    writeln!(out, "{latex}")?;

    writeln!(out, "\n🤖 Asking {} for an explanation...", pipeline.model())?;
    out.flush()?;
    let explanation = pipeline.explain(&latex).await?;

    writeln!(out, "\n🤖 Explanation:\n")?;
    writeln!(out, "{explanation}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use texplain_core::config::{LlmConfig, RecognizerConfig};
    use texplain_core::{ExplainError, LlmProvider, LlmRequest, LlmResponse, Recognizer};

    struct FixedProvider(&'static str);

    #[async_trait]
    impl LlmProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn model(&self) -> &str {
            "fixed-model"
        }

        async fn generate(&self, _request: &LlmRequest) -> Result<LlmResponse, ExplainError> {
            Ok(LlmResponse {
                text: self.0.to_string(),
                model: "fixed-model".to_string(),
                tokens_used: Some(12),
                latency_ms: 3,
            })
        }
    }

    /// Remembers the prompts it was sent.
    struct RecordingProvider {
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        fn model(&self) -> &str {
            "recording-model"
        }

        async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, ExplainError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            Ok(LlmResponse {
                text: "Nothing to explain.".to_string(),
                model: "recording-model".to_string(),
                tokens_used: None,
                latency_ms: 1,
            })
        }
    }

    fn args(image: &str) -> ExplainArgs {
        ExplainArgs {
            image: PathBuf::from(image),
            config: None,
            env_file: None,
            model: None,
            max_tokens: None,
            recognizer: None,
        }
    }

    #[cfg(unix)]
    fn shell_pipeline(script: &str, reply: &'static str) -> Pipeline {
        let recognizer = Recognizer::new(&RecognizerConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "recognizer".to_string()],
            timeout_ms: None,
        });
        Pipeline::new(
            recognizer,
            Box::new(FixedProvider(reply)),
            &LlmConfig::default(),
        )
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_prints_latex_and_explanation() {
        let pipeline = shell_pipeline(
            "echo 'Predicted: x^2+y^2=z^2'",
            "This is the Pythagorean theorem.",
        );
        let mut out = Vec::new();
        run(&pipeline, Path::new("eq.png"), &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("📄 Converting image to LaTeX...\n"));
        assert!(out.contains("📄 LaTeX Output:\n\nx^2+y^2=z^2\n"));
        assert!(out.contains("🤖 Asking fixed-model for an explanation..."));
        assert!(out.ends_with("🤖 Explanation:\n\nThis is the Pythagorean theorem.\n"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_stops_after_recognizer_failure() {
        let pipeline = shell_pipeline("echo 'bad image' >&2; exit 1", "unused");
        let mut out = Vec::new();
        let err = run(&pipeline, Path::new("eq.png"), &mut out)
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("bad image"));
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Explanation:"));
        assert!(!out.contains("Asking"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_explains_empty_recognizer_output() {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let recognizer = Recognizer::new(&RecognizerConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "exit 0".to_string(), "recognizer".to_string()],
            timeout_ms: None,
        });
        let provider = RecordingProvider {
            prompts: Arc::clone(&prompts),
        };
        let pipeline = Pipeline::new(recognizer, Box::new(provider), &LlmConfig::default());

        let mut out = Vec::new();
        run(&pipeline, Path::new("blank.png"), &mut out).await.unwrap();

        assert_eq!(
            *prompts.lock().unwrap(),
            vec!["Explain this equation to me:\n\n".to_string()]
        );
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("📄 LaTeX Output:\n\n\n"));
        assert!(out.ends_with("🤖 Explanation:\n\nNothing to explain.\n"));
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let mut a = args("eq.png");
        a.env_file = Some(PathBuf::from("/tmp/keys.env"));
        a.recognizer = Some("my-pix2tex".to_string());
        a.max_tokens = Some(200);
        a.model = Some("llama-4-scout-17b-16e-instruct".to_string());

        let mut config = Config::default();
        config.recognizer.args = vec!["--flag".to_string()];
        apply_overrides(&a, &mut config).unwrap();

        assert_eq!(config.credentials.env_file, PathBuf::from("/tmp/keys.env"));
        assert_eq!(config.recognizer.program, "my-pix2tex");
        assert!(config.recognizer.args.is_empty());
        assert_eq!(config.llm.max_tokens, 200);
        assert_eq!(config.llm.model, "llama-4-scout-17b-16e-instruct");
    }

    #[test]
    fn test_zero_max_tokens_is_rejected() {
        let mut a = args("eq.png");
        a.max_tokens = Some(0);
        let mut config = Config::default();
        let err = apply_overrides(&a, &mut config).unwrap_err();
        assert!(format!("{err:#}").contains("max_tokens"));
    }
}
