//! Unified chat-completions transport.
//!
//! One HTTP path serves every task; the historical split between a raw
//! client for text and a dedicated client for vision is collapsed into a
//! single `Transport` that picks the model from the task's capability
//! profile. One POST per call, bearer auth, no retries.

use std::time::Duration;

use serde::Serialize;

use super::message::Message;
use crate::config::{Credentials, LimitsConfig, ModelsConfig};
use crate::error::ClientError;

/// Generation settings for one call.
#[derive(Debug, Clone, Copy)]
pub struct TaskProfile {
    /// Whether the task sends images; selects the vision-capable model
    pub needs_vision: bool,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl TaskProfile {
    /// Text-only profile with the given token budget.
    pub fn text(max_tokens: u32) -> Self {
        Self {
            needs_vision: false,
            max_tokens,
            temperature: 0.7,
        }
    }

    /// Vision profile: deterministic sampling, vision-capable model.
    pub fn vision(max_tokens: u32) -> Self {
        Self {
            needs_vision: true,
            max_tokens,
            temperature: 0.0,
        }
    }

    /// Translation runs on the vision-capable model at temperature 0 but
    /// sends no images.
    pub fn translate(max_tokens: u32) -> Self {
        Self {
            needs_vision: true,
            max_tokens,
            temperature: 0.0,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [Message],
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

/// HTTP transport for the chat-completions endpoint.
pub struct Transport {
    client: reqwest::Client,
    credentials: Credentials,
    models: ModelsConfig,
    timeout: Duration,
}

impl Transport {
    pub fn new(credentials: Credentials, models: ModelsConfig, limits: &LimitsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            models,
            timeout: Duration::from_millis(limits.request_timeout_ms),
        }
    }

    /// The model a profile resolves to.
    pub fn model_for(&self, profile: &TaskProfile) -> &str {
        if profile.needs_vision {
            &self.models.vision_model
        } else {
            &self.models.text_model
        }
    }

    /// The endpoint URL requests are POSTed to.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.credentials.base_url)
    }

    /// Issue one chat-completion call and return the decoded JSON envelope.
    ///
    /// Non-success statuses fail loud with the status code and raw body;
    /// the caller does not retry.
    pub async fn chat(
        &self,
        messages: &[Message],
        profile: TaskProfile,
    ) -> Result<serde_json::Value, ClientError> {
        let model = self.model_for(&profile);
        let body = ChatRequest {
            messages,
            model,
            max_tokens: profile.max_tokens,
            temperature: profile.temperature,
            stream: false,
        };

        tracing::debug!(model, endpoint = %self.endpoint(), "Sending chat completion request");

        let resp = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.credentials.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope = resp.json::<serde_json::Value>().await?;
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::qa_messages;

    fn transport() -> Transport {
        Transport::new(
            Credentials::new("sk-test", "https://api.llama.com/v1"),
            ModelsConfig::default(),
            &LimitsConfig::default(),
        )
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(
            transport().endpoint(),
            "https://api.llama.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_profile_selects_model() {
        let t = transport();
        assert_eq!(
            t.model_for(&TaskProfile::text(256)),
            "Llama-3.3-8B-Instruct"
        );
        assert_eq!(
            t.model_for(&TaskProfile::vision(512)),
            "Llama-4-Scout-17B-16E-Instruct-FP8"
        );
        assert_eq!(
            t.model_for(&TaskProfile::translate(512)),
            "Llama-4-Scout-17B-16E-Instruct-FP8"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let messages = qa_messages("hi");
        let body = ChatRequest {
            messages: &messages,
            model: "Llama-3.3-8B-Instruct",
            max_tokens: 256,
            temperature: 0.7,
            stream: false,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "Llama-3.3-8B-Instruct");
        assert_eq!(value["max_tokens"], 256);
        assert_eq!(value["stream"], false);
        assert_eq!(value["messages"].as_array().unwrap().len(), 2);
        assert_eq!(value["messages"][0]["role"], "system");
    }

    #[test]
    fn test_vision_profile_is_deterministic() {
        let profile = TaskProfile::vision(512);
        assert_eq!(profile.temperature, 0.0);
        assert!(profile.needs_vision);
    }
}
