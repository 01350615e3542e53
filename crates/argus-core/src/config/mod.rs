//! Configuration management for Argus.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Credentials resolve in order: config value (with `${ENV_VAR}`
//! references expanded), then the `LLAMA_API_KEY` / `LLAMA_BASE_URL`
//! environment variables. Resolution happens once; the resulting
//! [`Credentials`] struct is immutable and injected into the session.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "LLAMA_API_KEY";

/// Environment variable consulted when no base URL is configured.
pub const BASE_URL_ENV: &str = "LLAMA_BASE_URL";

/// Root configuration structure for Argus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credential settings
    pub credentials: CredentialsConfig,

    /// Model selection and generation settings
    pub models: ModelsConfig,

    /// Request limits
    pub limits: LimitsConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.argus.argus/config.toml
    /// - Linux: ~/.config/argus/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\argus\config\config.toml
    ///
    /// Falls back to ~/.argus/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "argus", "argus")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".argus").join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

/// Resolved, immutable API credentials for one session.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
}

impl Credentials {
    /// Build credentials from explicit values (interactive entry).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Resolve credentials from config values and environment fallbacks.
    ///
    /// Errors name the missing piece and the environment variable that
    /// would supply it.
    pub fn resolve(config: &CredentialsConfig) -> Result<Self, ConfigError> {
        let api_key = resolve_env_var(&config.api_key)
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or_else(|| {
                ConfigError::MissingCredentials(format!(
                    "API key not set. Set credentials.api_key or the {API_KEY_ENV} env var."
                ))
            })?;
        let base_url = resolve_env_var(&config.base_url)
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .ok_or_else(|| {
                ConfigError::MissingCredentials(format!(
                    "Base URL not set. Set credentials.base_url or the {BASE_URL_ENV} env var."
                ))
            })?;
        Ok(Self::new(api_key, base_url))
    }

}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Strip a trailing slash so endpoint paths join cleanly.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.models.text_model, "Llama-3.3-8B-Instruct");
        assert_eq!(config.models.answer_max_tokens, 256);
        assert_eq!(config.limits.request_timeout_ms, 60_000);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[models]"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[models]\ntext_model = \"Llama-3.3-70B-Instruct\"\n\n[limits]\nrequest_timeout_ms = 5000"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.models.text_model, "Llama-3.3-70B-Instruct");
        assert_eq!(config.limits.request_timeout_ms, 5000);
        // Unspecified sections keep their defaults
        assert_eq!(config.models.summary_max_tokens, 150);
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_credentials_from_literal_config() {
        let cfg = CredentialsConfig {
            api_key: "sk-test".to_string(),
            base_url: "https://api.llama.com/v1/".to_string(),
        };
        let creds = Credentials::resolve(&cfg).unwrap();
        assert_eq!(creds.api_key, "sk-test");
        // Trailing slash is stripped
        assert_eq!(creds.base_url, "https://api.llama.com/v1");
    }

    #[test]
    fn test_credentials_missing_key_errors() {
        let cfg = CredentialsConfig {
            api_key: "${DEFINITELY_NOT_SET_XYZ_123}".to_string(),
            base_url: "https://api.llama.com/v1".to_string(),
        };
        // Guard: only meaningful when the fallback env var is also unset
        if std::env::var(API_KEY_ENV).is_err() {
            let err = Credentials::resolve(&cfg).unwrap_err();
            assert!(err.to_string().contains(API_KEY_ENV));
        }
    }
}
