//! Argus CLI - interactive LLM assistant with image analysis and grounding.
//!
//! Argus submits text and image requests to a hosted chat-completions API
//! and renders the results: answers, summaries, translations, image
//! descriptions, and tool bounding boxes drawn onto the source image.
//!
//! # Usage
//!
//! ```bash
//! # Ask a question
//! argus ask "What is a torque wrench for?"
//!
//! # Summarize a file
//! argus summarize --file notes.txt
//!
//! # Describe an image (URL or local file)
//! argus describe photo.jpg --prompt "What tools are on the bench?"
//!
//! # Ground tools with bounding boxes
//! argus ground bench.jpg --output bench_grounded.png
//!
//! # Guided interactive mode
//! argus
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Argus - interactive LLM assistant with image analysis and tool grounding.
#[derive(Parser, Debug)]
#[command(name = "argus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question and print the answer
    Ask(cli::tasks::AskArgs),

    /// Summarize a block of text
    Summarize(cli::tasks::SummarizeArgs),

    /// Translate a message between two languages
    Translate(cli::tasks::TranslateArgs),

    /// Describe a single image (URL or local file)
    Describe(cli::vision::DescribeArgs),

    /// Analyze up to nine images in one request
    Analyze(cli::vision::AnalyzeArgs),

    /// Locate tools in an image and draw bounding boxes
    Ground(cli::vision::GroundArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match argus_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `argus config path`."
            );
            argus_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Argus v{}", argus_core::VERSION);

    // Dispatch to the appropriate command handler; bare invocation enters
    // the guided interactive mode.
    match cli.command {
        Some(Commands::Ask(args)) => cli::tasks::ask(args, &config).await,
        Some(Commands::Summarize(args)) => cli::tasks::summarize(args, &config).await,
        Some(Commands::Translate(args)) => cli::tasks::translate(args, &config).await,
        Some(Commands::Describe(args)) => cli::vision::describe(args, &config).await,
        Some(Commands::Analyze(args)) => cli::vision::analyze(args, &config).await,
        Some(Commands::Ground(args)) => cli::vision::ground(args, &config).await,
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        None => cli::interactive::run(&config).await,
    }
}
