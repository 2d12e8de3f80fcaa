//! Cleanup of the recognizer's human-readable output.

/// Extract the LaTeX from recognizer stdout.
///
/// `pix2tex` prints `<label>: <latex>`, so everything up to and including the
/// first colon is dropped. Output without a colon is returned trimmed but
/// otherwise unchanged.
pub fn extract_latex(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.split_once(':') {
        Some((_, latex)) => latex.trim().to_string(),
        None => trimmed.to_string(),
    }
}
