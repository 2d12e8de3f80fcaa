//! API credential loading.
//!
//! The key is read once at startup from a dotenv-style file (or the process
//! environment) and handed to the provider as an explicit [`Credential`].

use crate::config::Config;
use crate::error::ConfigError;
use std::fmt;
use std::path::Path;

/// An API key. `Debug` output never includes the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Load the configured env file, then resolve `llm.api_key`.
    ///
    /// Fails with [`ConfigError::MissingCredential`] when the key is unset or empty.
    pub fn load(config: &Config) -> Result<Self, ConfigError> {
        let env_file = config.env_file();
        load_env_file(&env_file)?;
        Self::resolve(config, &env_file, |var| std::env::var(var).ok())
    }

    /// Resolve `llm.api_key` using `lookup` for `${VAR}` references.
    pub fn resolve<F>(config: &Config, env_file: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        resolve_env_var_with(&config.llm.api_key, lookup)
            .filter(|key| !key.trim().is_empty())
            .map(Self)
            .ok_or_else(|| ConfigError::MissingCredential {
                var: config
                    .llm
                    .api_key_var()
                    .unwrap_or("llm.api_key")
                    .to_string(),
                env_file: env_file.to_path_buf(),
            })
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Load `KEY=value` pairs from `path` into the process environment.
///
/// Variables already set are left alone. A missing file is not an error; the
/// key may come from the environment instead. Returns whether a file was read.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    if !path.is_file() {
        tracing::debug!("No credential file at {}", path.display());
        return Ok(false);
    }
    dotenv::from_path(path).map_err(|e| ConfigError::EnvFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!("Loaded credential file {}", path.display());
    Ok(true)
}

/// Resolve `${ENV_VAR}` references in config strings through `lookup`.
fn resolve_env_var_with<F>(value: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        lookup(var_name)
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn lookup_none(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_env_var() {
        assert_eq!(
            resolve_env_var_with("plain-key", lookup_none),
            Some("plain-key".to_string())
        );
        assert_eq!(resolve_env_var_with("", lookup_none), None);
        assert_eq!(
            resolve_env_var_with("${DEFINITELY_NOT_SET_XYZ_123}", lookup_none),
            None
        );
    }

    #[test]
    fn test_resolve_from_lookup() {
        let config = Config::default();
        let cred = Credential::resolve(&config, Path::new("api_key.env"), |var| {
            (var == "CEREBRAS_API_KEY").then(|| "csk-test".to_string())
        })
        .unwrap();
        assert_eq!(cred.expose(), "csk-test");
    }

    #[test]
    fn test_resolve_literal_key() {
        let mut config = Config::default();
        config.llm.api_key = "csk-literal".to_string();
        let cred = Credential::resolve(&config, Path::new("api_key.env"), lookup_none).unwrap();
        assert_eq!(cred.expose(), "csk-literal");
    }

    #[test]
    fn test_missing_key_is_error() {
        let config = Config::default();
        let err =
            Credential::resolve(&config, Path::new("api_key.env"), lookup_none).unwrap_err();
        match err {
            ConfigError::MissingCredential { var, env_file } => {
                assert_eq!(var, "CEREBRAS_API_KEY");
                assert_eq!(env_file, PathBuf::from("api_key.env"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_key_is_missing() {
        let config = Config::default();
        let err = Credential::resolve(&config, Path::new("api_key.env"), |_| {
            Some("   ".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { .. }));
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::new("csk-secret");
        assert!(!format!("{cred:?}").contains("csk-secret"));
    }

    #[test]
    fn test_load_env_file_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_env_file(&dir.path().join("api_key.env")).unwrap());
    }

    #[test]
    fn test_load_env_file_sets_var() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TEXPLAIN_TEST_ENV_FILE_KEY=csk-from-file").unwrap();
        assert!(load_env_file(file.path()).unwrap());
        assert_eq!(
            std::env::var("TEXPLAIN_TEST_ENV_FILE_KEY").ok(),
            Some("csk-from-file".to_string())
        );
    }
}
