//! texplain - turn a picture of an equation into LaTeX and an explanation.
//!
//! The image is handed to `pix2tex`, and the LaTeX it prints is sent to the
//! Cerebras chat-completions API with a request to explain it. The API key is
//! read from `api_key.env` (`CEREBRAS_API_KEY=...`) or the environment.
//!
//! # Usage
//!
//! ```bash
//! texplain equation.png
//!
//! # Different model, shorter answer
//! texplain equation.png --model llama-4-scout-17b-16e-instruct --max-tokens 200
//! ```

use clap::Parser;
use std::process::ExitCode;
use texplain_core::Config;

mod cli;
mod logging;

/// Convert an equation image to LaTeX and ask an LLM to explain it.
#[derive(Parser, Debug)]
#[command(name = "texplain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,

    #[command(flatten)]
    explain: cli::explain::ExplainArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit with 1; --help and --version still exit with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    // Logging isn't initialized yet, so config problems go straight to stderr.
    let config = match cli.explain.config.as_deref() {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Error: {} ({e})", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => match Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Config file: {}",
                    Config::default_path().display()
                );
                Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("texplain v{}", texplain_core::VERSION);

    match cli::explain::execute(cli.explain, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Run failed");
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}
