//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.models.text_model.is_empty() {
            return Err(ConfigError::ValidationError(
                "models.text_model must not be empty".into(),
            ));
        }
        if self.models.vision_model.is_empty() {
            return Err(ConfigError::ValidationError(
                "models.vision_model must not be empty".into(),
            ));
        }
        if self.models.answer_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "models.answer_max_tokens must be > 0".into(),
            ));
        }
        if self.models.summary_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "models.summary_max_tokens must be > 0".into(),
            ));
        }
        if self.models.vision_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "models.vision_max_tokens must be > 0".into(),
            ));
        }
        if self.limits.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.request_timeout_ms must be > 0".into(),
            ));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.format must be \"pretty\" or \"json\", got \"{other}\""
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.models.text_model = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("text_model"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.limits.request_timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("request_timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "yaml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
