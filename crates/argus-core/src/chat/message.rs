//! Chat message construction for the completions wire format.
//!
//! Text-only flows send plain-string content; vision flows send an ordered
//! content-block list with the prompt text first and images in input order.
//! Image-count preconditions are checked here, before anything touches the
//! network.

use serde::Serialize;

use super::media::ImageSource;
use crate::error::ClientError;

/// Maximum number of images one request may carry.
pub const MAX_IMAGES: usize = 9;

/// A role-tagged chat message.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: MessageContent,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Blocks(blocks),
        }
    }
}

/// Message content: a plain string for text-only flows, or a typed block
/// list for vision flows. Serialized untagged so both match the provider's
/// accepted shapes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// A typed unit of a chat message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Languages the translation flow can pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    French,
    Spanish,
    Hindi,
    Chinese,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::Hindi,
        Language::Chinese,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Hindi => "Hindi",
            Language::Chinese => "Chinese",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
                format!("unknown language '{s}', expected one of: {}", names.join(", "))
            })
    }
}

/// Build the two-message exchange for question answering.
pub fn qa_messages(question: &str) -> Vec<Message> {
    vec![
        Message::system("You are a helpful assistant that provides concise answers."),
        Message::user(question),
    ]
}

/// Build the two-message exchange for summarization.
pub fn summarize_messages(text: &str) -> Vec<Message> {
    vec![
        Message::system(
            "You are a summarization assistant. Create concise summaries that \
             capture the key points of the provided text.",
        ),
        Message::user(format!("Summarize the following text:\n\n{text}")),
    ]
}

/// Build the two-message exchange for translation.
///
/// The system message frames a bilingual-translator persona naming both
/// languages and demands the three-part structured reply the shell renders.
pub fn translate_messages(message: &str, source: Language, target: Language) -> Vec<Message> {
    let system_prompt = format!(
        "You're a bilingual translator between two people:\n\
         \x20 - The first person only speaks {source}\n\
         \x20 - The second person only speaks {target}\n\
         Return:\n\
         1. Recognized language: <detected language>\n\
         2. Translation of the input: <translation>\n\
         3. Answer to the input: <in the same language as the detected language>"
    );
    vec![Message::system(system_prompt), Message::user(message)]
}

/// Build the single user message for vision analysis.
///
/// Content blocks are ordered with the prompt text first, then the images
/// in input order. Rejects empty image lists and lists longer than
/// [`MAX_IMAGES`] before any network call.
pub fn vision_messages(
    prompt: &str,
    images: &[ImageSource],
) -> Result<Vec<Message>, ClientError> {
    if images.is_empty() {
        return Err(ClientError::NoImages);
    }
    if images.len() > MAX_IMAGES {
        return Err(ClientError::TooManyImages);
    }

    let mut blocks = Vec::with_capacity(images.len() + 1);
    blocks.push(ContentBlock::Text {
        text: prompt.to_string(),
    });
    blocks.extend(images.iter().map(|image| ContentBlock::ImageUrl {
        image_url: ImageUrl {
            url: image.as_uri(),
        },
    }));

    Ok(vec![Message::user_blocks(blocks)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qa_messages_shape() {
        let messages = qa_messages("What is Rust?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn test_summarize_prefixes_user_text() {
        let messages = summarize_messages("A long article.");
        let MessageContent::Text(text) = &messages[1].content else {
            panic!("expected plain text content");
        };
        assert!(text.starts_with("Summarize the following text:\n\n"));
        assert!(text.ends_with("A long article."));
    }

    #[test]
    fn test_translate_system_prompt_names_both_languages() {
        let messages = translate_messages("Bonjour", Language::French, Language::English);
        assert_eq!(messages.len(), 2);
        let MessageContent::Text(system) = &messages[0].content else {
            panic!("expected plain text content");
        };
        assert!(system.contains("French"));
        assert!(system.contains("English"));
        assert!(system.contains("Recognized language"));
        assert!(system.contains("Translation of the input"));
        assert!(system.contains("Answer to the input"));
    }

    #[test]
    fn test_vision_messages_text_block_first() {
        for n in 1..=MAX_IMAGES {
            let images: Vec<ImageSource> = (0..n)
                .map(|i| ImageSource::from_url(format!("https://example.com/{i}.png")))
                .collect();
            let messages = vision_messages("Describe these.", &images).unwrap();
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].role, "user");
            let MessageContent::Blocks(blocks) = &messages[0].content else {
                panic!("expected content blocks");
            };
            assert_eq!(blocks.len(), n + 1);
            assert!(matches!(blocks[0], ContentBlock::Text { .. }));
            assert!(blocks[1..]
                .iter()
                .all(|b| matches!(b, ContentBlock::ImageUrl { .. })));
        }
    }

    #[test]
    fn test_vision_messages_preserve_image_order() {
        let images = vec![
            ImageSource::from_url("https://example.com/a.png"),
            ImageSource::from_url("https://example.com/b.png"),
        ];
        let messages = vision_messages("Compare.", &images).unwrap();
        let MessageContent::Blocks(blocks) = &messages[0].content else {
            panic!("expected content blocks");
        };
        let ContentBlock::ImageUrl { image_url } = &blocks[1] else {
            panic!("expected image block");
        };
        assert_eq!(image_url.url, "https://example.com/a.png");
        let ContentBlock::ImageUrl { image_url } = &blocks[2] else {
            panic!("expected image block");
        };
        assert_eq!(image_url.url, "https://example.com/b.png");
    }

    #[test]
    fn test_vision_messages_reject_empty_list() {
        let err = vision_messages("Describe.", &[]).unwrap_err();
        assert_eq!(err.to_string(), "No image URLs provided.");
    }

    #[test]
    fn test_vision_messages_reject_ten_images() {
        let images: Vec<ImageSource> = (0..10)
            .map(|i| ImageSource::from_url(format!("https://example.com/{i}.png")))
            .collect();
        let err = vision_messages("Describe.", &images).unwrap_err();
        assert_eq!(err.to_string(), "You can only analyze up to 9 images.");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("french".parse::<Language>().unwrap(), Language::French);
        assert_eq!("Hindi".parse::<Language>().unwrap(), Language::Hindi);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_content_block_wire_shape() {
        let block = ContentBlock::ImageUrl {
            image_url: ImageUrl {
                url: "https://example.com/x.png".to_string(),
            },
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["type"], "image_url");
        assert_eq!(value["image_url"]["url"], "https://example.com/x.png");
    }

    #[test]
    fn test_plain_content_serializes_as_string() {
        let message = Message::system("hello");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["content"], "hello");
    }
}
