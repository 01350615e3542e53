//! CLI command implementations and shared helpers.

pub mod config;
pub mod interactive;
pub mod tasks;
pub mod vision;

use std::path::Path;
use std::time::Duration;

use argus_core::{ClientError, Config, Credentials, ImageSource, Session};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Build a session from config/env credentials.
///
/// Flag-based commands never prompt; missing credentials are a hard error
/// pointing at the env vars and config keys that would supply them.
pub fn session(config: &Config) -> anyhow::Result<Session> {
    let credentials = Credentials::resolve(&config.credentials)?;
    Ok(Session::new(credentials, config))
}

/// Busy indicator shown while a request is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Print a result string to stdout under a green heading.
pub fn print_result(heading: &str, text: &str) {
    let green = Style::new().for_stderr().green().bold();
    eprintln!("{}", green.apply_to(heading));
    println!("{text}");
}

/// Print a local validation warning (no network call was made).
pub fn print_warning(text: &str) {
    let warn = Style::new().for_stderr().yellow();
    eprintln!("  {}", warn.apply_to(text));
}

/// Print a transport failure.
pub fn print_error(err: &ClientError) {
    let red = Style::new().for_stderr().red();
    eprintln!("{}", red.apply_to(format!("✗ {err}")));
}

/// Render a completed call: validation errors as warnings, transport
/// failures as errors, anything else as the result.
pub fn report(heading: &str, outcome: Result<String, ClientError>) {
    match outcome {
        Ok(text) => print_result(heading, &text),
        Err(err @ (ClientError::NoImages | ClientError::TooManyImages)) => {
            print_warning(&err.to_string())
        }
        Err(err) => print_error(&err),
    }
}

/// Resolve a CLI image argument into an [`ImageSource`].
///
/// `http(s)://` strings pass through as remote references; anything else is
/// read from disk (with `~` expansion) and inlined as base64.
pub fn image_source(arg: &str) -> anyhow::Result<ImageSource> {
    if arg.starts_with("http://") || arg.starts_with("https://") {
        return Ok(ImageSource::from_url(arg));
    }

    let path = shellexpand::tilde(arg).into_owned();
    let bytes = std::fs::read(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read image {path}: {e}"))?;
    Ok(ImageSource::from_bytes(&bytes, &extension_format(&path)))
}

/// Image format identifier from a file extension, lowercased.
pub fn extension_format(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "jpeg".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_format() {
        assert_eq!(extension_format("photo.JPG"), "jpg");
        assert_eq!(extension_format("photo.png"), "png");
        assert_eq!(extension_format("no_extension"), "jpeg");
    }

    #[test]
    fn test_image_source_url_passthrough() {
        let source = image_source("https://example.com/a.png").unwrap();
        assert_eq!(source.as_uri(), "https://example.com/a.png");
    }

    #[test]
    fn test_image_source_missing_file_errors() {
        let err = image_source("/definitely/not/here.png").unwrap_err();
        assert!(err.to_string().contains("Failed to read image"));
    }

    #[test]
    fn test_image_source_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        std::fs::write(&path, [0x89, 0x50, 0x4E, 0x47]).unwrap();

        let source = image_source(path.to_str().unwrap()).unwrap();
        assert!(source.as_uri().starts_with("data:image/png;base64,"));
    }
}
