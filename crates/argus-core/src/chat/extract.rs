//! Assistant-text extraction from the completion envelope.
//!
//! This boundary is fail-soft by contract: whatever shape the provider
//! returns, the caller gets a displayable string. One odd reply must never
//! abort an interactive session, so unrecognized shapes come back as an
//! inline `[Error ...]` string instead of an `Err`.

use serde_json::Value;

/// Extract the assistant's text from a decoded completion envelope.
///
/// Handles `completion_message.content` as a plain string and as a nested
/// `{"text": ...}` object, plus the OpenAI-compatible
/// `choices[0].message.content` shape. The result is trimmed. Unrecognized
/// shapes yield a string starting with `[Error`.
pub fn extract_content(envelope: &Value) -> String {
    match try_extract(envelope) {
        Some(text) => text.trim().to_string(),
        None => format!(
            "[Error extracting content: unrecognized response shape: {}]",
            summarize_shape(envelope)
        ),
    }
}

fn try_extract(envelope: &Value) -> Option<String> {
    if let Some(message) = envelope.get("completion_message") {
        let content = message.get("content")?;
        return match content {
            Value::String(text) => Some(text.clone()),
            Value::Object(_) => content
                .get("text")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        };
    }

    // OpenAI-compatible fallback, kept for providers that proxy the
    // completions endpoint in choices shape.
    envelope
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

/// A short description of the envelope for the inline error string.
fn summarize_shape(envelope: &Value) -> String {
    match envelope {
        Value::Object(map) => {
            let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
            keys.sort_unstable();
            format!("object with keys [{}]", keys.join(", "))
        }
        Value::Array(items) => format!("array of {} items", items.len()),
        other => format!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string_content() {
        let envelope = json!({"completion_message": {"content": "hello"}});
        assert_eq!(extract_content(&envelope), "hello");
    }

    #[test]
    fn test_nested_text_content() {
        let envelope = json!({"completion_message": {"content": {"text": "hi"}}});
        assert_eq!(extract_content(&envelope), "hi");
    }

    #[test]
    fn test_choices_fallback() {
        let envelope = json!({"choices": [{"message": {"content": "fallback"}}]});
        assert_eq!(extract_content(&envelope), "fallback");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let envelope = json!({"completion_message": {"content": "  spaced out \n"}});
        assert_eq!(extract_content(&envelope), "spaced out");
    }

    #[test]
    fn test_empty_envelope_yields_error_string() {
        let envelope = json!({});
        let result = extract_content(&envelope);
        assert!(result.starts_with("[Error"));
    }

    #[test]
    fn test_unexpected_content_type_yields_error_string() {
        let envelope = json!({"completion_message": {"content": 42}});
        assert!(extract_content(&envelope).starts_with("[Error"));
    }

    #[test]
    fn test_error_string_names_present_keys() {
        let envelope = json!({"error": "quota", "id": "abc"});
        let result = extract_content(&envelope);
        assert!(result.starts_with("[Error"));
        assert!(result.contains("error"));
        assert!(result.contains("id"));
    }
}
