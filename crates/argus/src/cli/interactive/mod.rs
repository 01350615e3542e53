//! Interactive mode — guided experience for bare `argus` invocation.
//!
//! When `argus` is invoked with no subcommand on a TTY, this module provides
//! a menu-driven interface over the same session API as the flag-based CLI:
//! credential entry first when unconfigured, then one network call per
//! selected task with a spinner while the request is in flight.

pub mod setup;
pub mod theme;

use argus_core::{Config, Language, Session};
use console::Style;
use dialoguer::{Input, Select};

use super::{image_source, report, spinner};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
///
/// Use this to wrap `interact_text()` / `interact()` calls that lack an `_opt`
/// variant, so interrupts exit the current flow cleanly instead of panicking.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Ask a question",
    "Summarize text",
    "Translate a message",
    "Describe an image",
    "Analyze multiple images",
    "Ground tools in an image",
    "Show configuration",
    "Exit",
];

/// Entry point for interactive mode. Called when `argus` is invoked with no subcommand.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    theme::print_banner();

    let Some(credentials) = setup::obtain_credentials(config)? else {
        return Ok(());
    };
    // One session per run; credentials are read-only from here on.
    let session = Session::new(credentials, config);

    let theme = theme::argus_theme();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => ask_flow(&session).await?,
            Some(1) => summarize_flow(&session).await?,
            Some(2) => translate_flow(&session).await?,
            Some(3) => describe_flow(&session).await?,
            Some(4) => analyze_flow(&session).await?,
            Some(5) => ground_flow(&session).await?,
            Some(6) => show_config(config)?,
            Some(7) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Prompt for one line of input; `None` on interrupt.
fn prompt_text(prompt: &str) -> anyhow::Result<Option<String>> {
    let theme = theme::argus_theme();
    handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text(),
    )
}

fn warn(text: &str) {
    let style = Style::new().for_stderr().yellow();
    eprintln!("  {}", style.apply_to(text));
}

async fn ask_flow(session: &Session) -> anyhow::Result<()> {
    let Some(question) = prompt_text("Enter your question")? else {
        return Ok(());
    };
    if question.trim().is_empty() {
        warn("Please enter a question.");
        return Ok(());
    }

    let bar = spinner("Thinking...");
    let outcome = session.ask(&question).await;
    bar.finish_and_clear();

    report("Answer:", outcome);
    Ok(())
}

async fn summarize_flow(session: &Session) -> anyhow::Result<()> {
    let Some(text) = prompt_text("Paste text to summarize")? else {
        return Ok(());
    };
    if text.trim().is_empty() {
        warn("Please enter some text.");
        return Ok(());
    }

    let bar = spinner("Summarizing...");
    let outcome = session.summarize(&text).await;
    bar.finish_and_clear();

    report("Summary:", outcome);
    Ok(())
}

async fn translate_flow(session: &Session) -> anyhow::Result<()> {
    let theme = theme::argus_theme();
    let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();

    let Some(source_idx) = Select::with_theme(&theme)
        .with_prompt("First speaker's language")
        .items(&names)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };
    let Some(target_idx) = Select::with_theme(&theme)
        .with_prompt("Second speaker's language")
        .items(&names)
        .default(1)
        .interact_opt()?
    else {
        return Ok(());
    };

    let Some(message) = prompt_text("Message to translate")? else {
        return Ok(());
    };
    if message.trim().is_empty() {
        warn("Please enter a message to translate.");
        return Ok(());
    }

    let bar = spinner("Translating...");
    let outcome = session
        .translate(&message, Language::ALL[source_idx], Language::ALL[target_idx])
        .await;
    bar.finish_and_clear();

    report("Translation:", outcome);
    Ok(())
}

async fn describe_flow(session: &Session) -> anyhow::Result<()> {
    let Some(image) = prompt_text("Image URL or file path")? else {
        return Ok(());
    };
    if image.trim().is_empty() {
        warn("Please provide an image.");
        return Ok(());
    }
    let source = match image_source(image.trim()) {
        Ok(source) => source,
        Err(e) => {
            warn(&e.to_string());
            return Ok(());
        }
    };

    let Some(prompt) = prompt_text("What do you want to know about it?")? else {
        return Ok(());
    };
    let prompt = if prompt.trim().is_empty() {
        "Describe what you see in detail.".to_string()
    } else {
        prompt
    };

    let bar = spinner("Analyzing image...");
    let outcome = session.describe_image(&prompt, source).await;
    bar.finish_and_clear();

    report("Description:", outcome);
    Ok(())
}

async fn analyze_flow(session: &Session) -> anyhow::Result<()> {
    let dim = Style::new().for_stderr().dim();
    eprintln!(
        "  {}",
        dim.apply_to("Enter image URLs or paths, one per line; empty line to finish.")
    );

    let mut sources = Vec::new();
    loop {
        let Some(entry) = prompt_text("Image")? else {
            return Ok(());
        };
        if entry.trim().is_empty() {
            break;
        }
        match image_source(entry.trim()) {
            Ok(source) => sources.push(source),
            Err(e) => warn(&e.to_string()),
        }
    }

    let Some(prompt) = prompt_text("What do you want to know about them?")? else {
        return Ok(());
    };
    let prompt = if prompt.trim().is_empty() {
        "Describe what you see in detail.".to_string()
    } else {
        prompt
    };

    // Count preconditions (none, or more than nine) are checked by the
    // session before any network call and come back as warnings.
    let bar = spinner("Analyzing images...");
    let outcome = session.analyze_images(&prompt, sources).await;
    bar.finish_and_clear();

    report("Analysis:", outcome);
    Ok(())
}

async fn ground_flow(session: &Session) -> anyhow::Result<()> {
    let Some(raw_path) = prompt_text("Path to image")? else {
        return Ok(());
    };
    if raw_path.trim().is_empty() {
        warn("Please provide an image.");
        return Ok(());
    }

    let path = std::path::PathBuf::from(shellexpand::tilde(raw_path.trim()).into_owned());
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn(&format!("Failed to read image {}: {e}", path.display()));
            return Ok(());
        }
    };
    let format = crate::cli::extension_format(&path.to_string_lossy());

    let bar = spinner("Grounding...");
    let outcome = session.ground(&bytes, &format, None).await;
    bar.finish_and_clear();

    match outcome {
        Ok(grounding) => {
            let output = path.with_file_name(format!(
                "{}_grounded.png",
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "image".to_string())
            ));
            if let Err(e) = std::fs::write(&output, &grounding.overlay.png) {
                warn(&format!("Failed to write overlay: {e}"));
            }
            crate::cli::vision::render_grounding(&grounding, &output);
        }
        Err(err) => super::print_error(&err),
    }
    Ok(())
}

/// Interactive config viewer — shows a summary of current settings.
fn show_config(config: &Config) -> anyhow::Result<()> {
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();

    let config_path = Config::default_path();
    let path_note = if config_path.exists() {
        "(exists)"
    } else {
        "(using defaults)"
    };

    eprintln!();
    eprintln!("  {}", cyan.apply_to("Current configuration:"));
    eprintln!();
    eprintln!(
        "    {:<16} {} {}",
        label.apply_to("Config file:"),
        config_path.display(),
        dim.apply_to(path_note)
    );
    eprintln!(
        "    {:<16} {}",
        label.apply_to("Text model:"),
        config.models.text_model
    );
    eprintln!(
        "    {:<16} {}",
        label.apply_to("Vision model:"),
        config.models.vision_model
    );
    eprintln!(
        "    {:<16} {} ms",
        label.apply_to("Timeout:"),
        config.limits.request_timeout_ms
    );
    eprintln!();

    Ok(())
}
