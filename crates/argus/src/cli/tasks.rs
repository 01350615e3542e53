//! Text-only task commands: ask, summarize, translate.

use argus_core::{Config, Language};
use clap::Args;
use std::path::PathBuf;

use super::{print_warning, report, session, spinner};

/// Arguments for the `ask` command.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    pub question: String,
}

/// Arguments for the `summarize` command.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Text to summarize (omit when using --file)
    pub text: Option<String>,

    /// Read the text to summarize from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `translate` command.
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// The message to translate
    pub message: String,

    /// Language the first speaker uses
    #[arg(long = "from")]
    pub source: Language,

    /// Language the second speaker uses
    #[arg(long = "to")]
    pub target: Language,
}

/// Execute the `ask` command.
pub async fn ask(args: AskArgs, config: &Config) -> anyhow::Result<()> {
    if args.question.trim().is_empty() {
        print_warning("Please enter a question.");
        return Ok(());
    }

    let session = session(config)?;
    let bar = spinner("Thinking...");
    let outcome = session.ask(&args.question).await;
    bar.finish_and_clear();

    report("Answer:", outcome);
    Ok(())
}

/// Execute the `summarize` command.
pub async fn summarize(args: SummarizeArgs, config: &Config) -> anyhow::Result<()> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read {}: {e}", path.display())
        })?,
        (None, None) => {
            print_warning("Please enter some text.");
            return Ok(());
        }
    };

    if text.trim().is_empty() {
        print_warning("Please enter some text.");
        return Ok(());
    }

    let session = session(config)?;
    let bar = spinner("Summarizing...");
    let outcome = session.summarize(&text).await;
    bar.finish_and_clear();

    report("Summary:", outcome);
    Ok(())
}

/// Execute the `translate` command.
pub async fn translate(args: TranslateArgs, config: &Config) -> anyhow::Result<()> {
    if args.message.trim().is_empty() {
        print_warning("Please enter a message to translate.");
        return Ok(());
    }

    let session = session(config)?;
    let bar = spinner("Translating...");
    let outcome = session
        .translate(&args.message, args.source, args.target)
        .await;
    bar.finish_and_clear();

    report("Translation:", outcome);
    Ok(())
}
