//! The `argus config` command for configuration management.

use clap::{Args, Subcommand};

use argus_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Save an API key to the config file
    SetKey {
        /// The key to save; prompted for when omitted
        key: Option<String>,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            let toml = config.to_toml()?;
            println!("{}", toml);
        }

        ConfigCommand::Path => {
            let path = Config::default_path();
            println!("{}", path.display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            // Ensure parent directory exists
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            // Write default config
            let config = Config::default();
            let toml = config.to_toml()?;
            std::fs::write(&path, toml)?;

            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }

        ConfigCommand::SetKey { key } => {
            let key = match key {
                Some(key) => key,
                None => dialoguer::Password::new()
                    .with_prompt("API key")
                    .interact()?,
            };
            if key.trim().is_empty() {
                anyhow::bail!("Refusing to save an empty API key.");
            }

            let path = Config::default_path();
            save_credentials(&path, Some(&key), None)?;
            println!("Key saved to {}", path.display());
        }
    }

    Ok(())
}

/// Persist credential values into the config TOML, preserving any comments
/// and unrelated sections the user added by hand.
pub fn save_credentials(
    path: &std::path::Path,
    api_key: Option<&str>,
    base_url: Option<&str>,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    let mut doc: toml_edit::DocumentMut = content.parse().unwrap_or_default();

    // Ensure [credentials] table exists
    if !doc.contains_key("credentials") {
        doc["credentials"] = toml_edit::Item::Table(toml_edit::Table::new());
    }

    if let Some(key) = api_key {
        doc["credentials"]["api_key"] = toml_edit::value(key);
    }
    if let Some(url) = base_url {
        doc["credentials"]["base_url"] = toml_edit::value(url);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, doc.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_credentials_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        save_credentials(&path, Some("sk-test"), Some("https://api.llama.com/v1")).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.credentials.api_key, "sk-test");
        assert_eq!(config.credentials.base_url, "https://api.llama.com/v1");
    }

    #[test]
    fn test_save_credentials_preserves_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "# my settings\n[models]\ntext_model = \"Llama-3.3-70B-Instruct\"\n",
        )
        .unwrap();

        save_credentials(&path, Some("sk-test"), None).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("# my settings"));
        assert!(written.contains("Llama-3.3-70B-Instruct"));
        assert!(written.contains("sk-test"));
    }
}
