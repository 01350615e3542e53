//! Sub-configuration structs with defaults matching the provider surface.

use serde::{Deserialize, Serialize};

/// Credential settings.
///
/// Values may reference environment variables with `${VAR}` syntax; empty
/// values fall back to `LLAMA_API_KEY` / `LLAMA_BASE_URL` at resolution time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// API key, literal or `${ENV_VAR}` reference
    pub api_key: String,

    /// Base endpoint URL, e.g. "https://api.llama.com/v1"
    pub base_url: String,
}

/// Model selection and generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Model used for text-only tasks (ask, summarize)
    pub text_model: String,

    /// Model used for tasks that need vision or deterministic output
    pub vision_model: String,

    /// Token budget for answers
    pub answer_max_tokens: u32,

    /// Token budget for summaries
    pub summary_max_tokens: u32,

    /// Token budget for vision and translation replies
    pub vision_max_tokens: u32,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            text_model: "Llama-3.3-8B-Instruct".to_string(),
            vision_model: "Llama-4-Scout-17B-16E-Instruct-FP8".to_string(),
            answer_max_tokens: 256,
            summary_max_tokens: 150,
            vision_max_tokens: 512,
        }
    }
}

/// Resource limits for outbound requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 60_000,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
