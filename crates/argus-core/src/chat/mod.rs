//! Chat-completions client: message construction, media encoding, the
//! unified transport, and fail-soft reply extraction.

pub mod extract;
pub mod media;
pub mod message;
pub mod transport;

pub use extract::extract_content;
pub use media::ImageSource;
pub use message::{
    qa_messages, summarize_messages, translate_messages, vision_messages, ContentBlock, Language,
    Message, MessageContent, MAX_IMAGES,
};
pub use transport::{TaskProfile, Transport};
