//! Credential setup — detection, interactive entry, and optional persistence.

use argus_core::config::{API_KEY_ENV, BASE_URL_ENV};
use argus_core::{Config, Credentials};
use console::Style;
use dialoguer::{Input, Password, Select};

use super::theme::argus_theme;

/// Resolve credentials for this session, prompting when config and
/// environment supply nothing.
///
/// Returns `None` if the user cancels. Entered credentials are held for the
/// session only unless the user chooses to persist the key.
pub fn obtain_credentials(config: &Config) -> anyhow::Result<Option<Credentials>> {
    if let Ok(credentials) = Credentials::resolve(&config.credentials) {
        let dim = Style::new().for_stderr().dim();
        eprintln!(
            "  {}",
            dim.apply_to("Using API credentials from config / environment")
        );
        return Ok(Some(credentials));
    }

    let theme = argus_theme();
    let warn = Style::new().for_stderr().yellow();
    eprintln!(
        "  {}",
        warn.apply_to(format!(
            "No API credentials found ({API_KEY_ENV} / {BASE_URL_ENV} unset)."
        ))
    );

    let api_key: String = match Password::with_theme(&theme)
        .with_prompt("LLaMA API key (empty to cancel)")
        .allow_empty_password(true)
        .interact()
    {
        Ok(key) if !key.is_empty() => key,
        _ => return Ok(None),
    };

    let Some(base_url) = super::handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt("Base URL")
            .default("https://api.llama.com/v1".to_string())
            .interact_text(),
    )?
    else {
        return Ok(None);
    };

    if base_url.trim().is_empty() {
        eprintln!("  {}", warn.apply_to("Both API key and base URL are required."));
        return Ok(None);
    }

    // Offer to persist the key; the base URL goes with it so the next
    // session starts without prompting.
    let save_options = &["Yes, save to config file", "No, use for this session only"];
    let save_choice = Select::with_theme(&theme)
        .with_prompt("Save these credentials for future sessions?")
        .items(save_options)
        .default(0)
        .interact_opt()?;

    match save_choice {
        Some(0) => {
            let path = Config::default_path();
            if let Err(e) =
                crate::cli::config::save_credentials(&path, Some(&api_key), Some(&base_url))
            {
                eprintln!(
                    "  {}",
                    warn.apply_to(format!("Could not save to config: {e}"))
                );
                eprintln!("  Using credentials for this session only.");
            } else {
                let dim = Style::new().for_stderr().dim();
                eprintln!(
                    "  {}",
                    dim.apply_to(format!("Credentials saved to {}", path.display()))
                );
            }
        }
        Some(1) => {}
        _ => return Ok(None), // Cancelled / Esc
    }

    Ok(Some(Credentials::new(api_key, base_url)))
}
