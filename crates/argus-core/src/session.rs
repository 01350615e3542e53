//! Session API — the entry point the shell calls into.
//!
//! A session holds resolved credentials and model settings for the duration
//! of one interactive run. Credentials are read-only after construction;
//! every method performs exactly one network call.

use crate::chat::{
    extract_content, qa_messages, summarize_messages, translate_messages, vision_messages,
    ImageSource, Language, TaskProfile, Transport,
};
use crate::config::{Config, Credentials, ModelsConfig};
use crate::error::ClientError;
use crate::grounding::{self, GroundingParser, Overlay, Tool};

/// Prompt sent for grounding calls, matched to the parser's expected reply
/// format (bold label lines, `<BBOX>` coordinate tokens).
pub const GROUNDING_PROMPT: &str =
    "Identify every tool visible in this image. For each tool, write its name \
     in bold on its own line, followed by its bounding box as \
     <BBOX>x1,y1,x2,y2</BBOX> where the coordinates are fractions of the \
     image width and height between 0 and 1.";

/// Result of one grounding call.
#[derive(Debug, Clone)]
pub struct Grounding {
    /// Raw reply text, shown alongside the rendered image
    pub reply: String,
    /// Parsed regions in reply order
    pub tools: Vec<Tool>,
    /// Annotated source image plus color legend
    pub overlay: Overlay,
}

/// One interactive session against a chat-completions provider.
pub struct Session {
    transport: Transport,
    settings: ModelsConfig,
    parser: GroundingParser,
}

impl Session {
    /// Build a session from resolved credentials and loaded configuration.
    pub fn new(credentials: Credentials, config: &Config) -> Self {
        Self {
            transport: Transport::new(credentials, config.models.clone(), &config.limits),
            settings: config.models.clone(),
            parser: GroundingParser::new(),
        }
    }

    /// Answer a free-form question.
    pub async fn ask(&self, question: &str) -> Result<String, ClientError> {
        let messages = qa_messages(question);
        let profile = TaskProfile::text(self.settings.answer_max_tokens);
        let envelope = self.transport.chat(&messages, profile).await?;
        Ok(extract_content(&envelope))
    }

    /// Summarize a block of text.
    pub async fn summarize(&self, text: &str) -> Result<String, ClientError> {
        let messages = summarize_messages(text);
        let profile = TaskProfile::text(self.settings.summary_max_tokens);
        let envelope = self.transport.chat(&messages, profile).await?;
        Ok(extract_content(&envelope))
    }

    /// Translate between two fixed languages, returning the three-part
    /// structured reply.
    pub async fn translate(
        &self,
        message: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ClientError> {
        let messages = translate_messages(message, source, target);
        let profile = TaskProfile::translate(self.settings.vision_max_tokens);
        let envelope = self.transport.chat(&messages, profile).await?;
        Ok(extract_content(&envelope))
    }

    /// Describe a single image (remote URL or inline bytes).
    pub async fn describe_image(
        &self,
        prompt: &str,
        image: ImageSource,
    ) -> Result<String, ClientError> {
        self.analyze_images(prompt, vec![image]).await
    }

    /// Analyze up to nine images bundled into one request.
    pub async fn analyze_images(
        &self,
        prompt: &str,
        images: Vec<ImageSource>,
    ) -> Result<String, ClientError> {
        let messages = vision_messages(prompt, &images)?;
        let profile = TaskProfile::vision(self.settings.vision_max_tokens);
        let envelope = self.transport.chat(&messages, profile).await?;
        Ok(extract_content(&envelope))
    }

    /// Ground tools in an uploaded image: one vision call, then parse the
    /// reply and render the overlay from the same source bytes.
    pub async fn ground(
        &self,
        image_bytes: &[u8],
        format: &str,
        prompt: Option<&str>,
    ) -> Result<Grounding, ClientError> {
        let image = ImageSource::from_bytes(image_bytes, format);
        let reply = self
            .analyze_images(prompt.unwrap_or(GROUNDING_PROMPT), vec![image])
            .await?;

        let tools = self.parser.parse(&reply);
        tracing::debug!(tools = tools.len(), "Parsed grounding reply");

        let overlay = grounding::render(image_bytes, &tools)?;
        Ok(Grounding {
            reply,
            tools,
            overlay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounding_prompt_matches_parser_format() {
        // The prompt must ask for the exact token shape the parser scrapes.
        assert!(GROUNDING_PROMPT.contains("<BBOX>x1,y1,x2,y2</BBOX>"));
        assert!(GROUNDING_PROMPT.contains("bold"));
    }

    #[test]
    fn test_session_construction() {
        let config = Config::default();
        let session = Session::new(Credentials::new("sk-test", "https://api.llama.com/v1"), &config);
        assert_eq!(session.settings.answer_max_tokens, 256);
    }
}
