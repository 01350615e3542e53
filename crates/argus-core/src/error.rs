//! Error types for the Argus assistant core.
//!
//! Errors are organized by boundary: configuration errors, client errors
//! (validation, transport, grounding), and a top-level wrapper. Local
//! precondition failures carry the exact message shown to the user, so the
//! shell can render them as warnings without a network call ever happening.

use thiserror::Error;

/// Top-level error type for Argus operations.
#[derive(Error, Debug)]
pub enum ArgusError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chat client errors
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// No API credentials found in config, environment, or prompt
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}

/// Chat client errors, organized by boundary.
///
/// The validation variants display the exact strings the original surface
/// showed, so callers can print `err.to_string()` directly.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Vision request built with an empty image list
    #[error("No image URLs provided.")]
    NoImages,

    /// Vision request built with more images than one call may carry
    #[error("You can only analyze up to 9 images.")]
    TooManyImages,

    /// The HTTP request itself failed (connect, timeout, TLS)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Decoding or encoding image pixels failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// An inline payload was not valid base64
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Convenience type alias for Argus results.
pub type Result<T> = std::result::Result<T, ArgusError>;

/// Convenience type alias for client-specific results.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_literal_messages() {
        assert_eq!(
            ClientError::NoImages.to_string(),
            "No image URLs provided."
        );
        assert_eq!(
            ClientError::TooManyImages.to_string(),
            "You can only analyze up to 9 images."
        );
    }

    #[test]
    fn test_api_error_carries_status_and_body() {
        let err = ClientError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("rate limited"));
    }
}
