//! Image references for chat requests.
//!
//! An image reaches the provider either as a remote URL passed through
//! unchanged, or as raw bytes inlined into a base64 data URL. No resizing,
//! recompression, or pixel validation happens here; malformed bytes are the
//! provider's problem to report.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::ClientError;

/// An image reference ready to place in a content block.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Remote image, sent as-is
    Url(String),
    /// Inline image, sent as a base64 data URL
    Inline {
        /// Base64-encoded image bytes
        data: String,
        /// MIME type (e.g., "image/jpeg", "image/png")
        media_type: String,
    },
}

impl ImageSource {
    /// Create an inline source from raw bytes and a format string.
    ///
    /// The format is the image format identifier (e.g., "jpeg", "png", "webp").
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        let media_type = match format {
            "jpeg" | "jpg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            other => {
                tracing::warn!("Unknown image format '{other}', defaulting to image/jpeg");
                "image/jpeg"
            }
        };

        Self::Inline {
            data: BASE64.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Create a passthrough source from a remote URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Return the wire string: the URL unchanged, or a data URL.
    pub fn as_uri(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Inline { data, media_type } => format!("data:{media_type};base64,{data}"),
        }
    }

    /// Decode an inline source back to its original bytes.
    ///
    /// Returns `None` for URL sources, which carry no payload.
    pub fn decode(&self) -> Option<Result<Vec<u8>, ClientError>> {
        match self {
            Self::Url(_) => None,
            Self::Inline { data, .. } => {
                Some(BASE64.decode(data).map_err(|e| ClientError::Decode(e.to_string())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_jpeg() {
        let source = ImageSource::from_bytes(&[0xFF, 0xD8, 0xFF], "jpeg");
        let ImageSource::Inline { media_type, data } = &source else {
            panic!("expected inline source");
        };
        assert_eq!(media_type, "image/jpeg");
        assert!(!data.is_empty());
    }

    #[test]
    fn test_from_bytes_png() {
        let source = ImageSource::from_bytes(&[0x89, 0x50, 0x4E, 0x47], "png");
        assert!(source.as_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_unknown_format_defaults_to_jpeg() {
        let source = ImageSource::from_bytes(&[1, 2, 3], "tiff");
        assert!(source.as_uri().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_url_passes_through_unchanged() {
        let source = ImageSource::from_url("https://example.com/cat.png");
        assert_eq!(source.as_uri(), "https://example.com/cat.png");
        assert!(source.decode().is_none());
    }

    #[test]
    fn test_inline_round_trip_is_byte_exact() {
        let original: Vec<u8> = (0..=255).collect();
        let source = ImageSource::from_bytes(&original, "png");
        let decoded = source.decode().unwrap().unwrap();
        assert_eq!(decoded, original);
    }
}
