//! Image-to-LaTeX recognition by way of an external program.
//!
//! Runs `pix2tex <image>` (or whatever the config names) as a child process,
//! captures stdout and stderr separately, and turns a successful run into a
//! LaTeX string with [`extract_latex`].

mod latex;

pub use latex::extract_latex;

use crate::config::RecognizerConfig;
use crate::error::RecognizeError;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

/// Runs the external recognizer.
#[derive(Debug, Clone)]
pub struct Recognizer {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl Recognizer {
    pub fn new(config: &RecognizerConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            timeout: config.timeout_ms.map(Duration::from_millis),
        }
    }

    /// Recognize the equation in `image` and return its LaTeX source.
    ///
    /// The image path is passed through untouched; the recognizer reports
    /// missing or unreadable files itself.
    pub async fn recognize(&self, image: &Path) -> Result<String, RecognizeError> {
        let start = Instant::now();
        tracing::debug!(
            program = %self.program,
            args = ?self.args,
            image = %image.display(),
            "Running recognizer"
        );

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(image)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RecognizeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| RecognizeError::Timeout {
                    program: self.program.clone(),
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|source| RecognizeError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        tracing::debug!(
            status = %output.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Recognizer finished"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RecognizeError::Failed {
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let latex = extract_latex(&stdout);
        if latex.is_empty() {
            tracing::warn!("Recognizer succeeded but produced no LaTeX");
        }
        Ok(latex)
    }
}
