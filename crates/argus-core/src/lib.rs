//! Argus Core - adapter layer between user input and a chat-completions API.
//!
//! Argus turns heterogeneous user input (free text, image URLs, uploaded
//! image bytes, multi-image batches) into the provider's wire format, and
//! turns replies back into structured results: plain text, or named bounding
//! boxes drawn onto the source image.
//!
//! # Architecture
//!
//! ```text
//! Input → Messages → Transport (one POST) → Extract → [Parse → Overlay] → Result
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use argus_core::{Config, Credentials, Session};
//!
//! #[tokio::main]
//! async fn main() -> argus_core::Result<()> {
//!     let config = Config::load()?;
//!     let credentials = Credentials::resolve(&config.credentials)?;
//!     let session = Session::new(credentials, &config);
//!
//!     let answer = session.ask("What is a torque wrench for?").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod chat;
pub mod config;
pub mod error;
pub mod grounding;
pub mod session;

// Re-exports for convenient access
pub use chat::{ImageSource, Language, Transport};
pub use config::{Config, Credentials};
pub use error::{ArgusError, ClientError, ClientResult, ConfigError, Result};
pub use grounding::{BoundingBox, GroundingParser, Overlay, Tool};
pub use session::{Grounding, Session, GROUNDING_PROMPT};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
