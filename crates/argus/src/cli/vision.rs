//! Vision task commands: describe, analyze, ground.

use std::path::PathBuf;

use argus_core::{Config, Grounding};
use clap::Args;
use console::Style;

use super::{extension_format, image_source, print_error, report, session, spinner};

/// Default prompt when the user provides none.
const DEFAULT_VISION_PROMPT: &str = "Describe what you see in detail.";

/// Arguments for the `describe` command.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Image URL or local file path
    pub image: String,

    /// Instruction for the model
    #[arg(short, long)]
    pub prompt: Option<String>,
}

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image URLs or local file paths (one request carries them all)
    #[arg(required = true)]
    pub images: Vec<String>,

    /// Instruction for the model
    #[arg(short, long)]
    pub prompt: Option<String>,
}

/// Arguments for the `ground` command.
#[derive(Args, Debug)]
pub struct GroundArgs {
    /// Local image file to ground
    pub image: PathBuf,

    /// Override the built-in grounding prompt
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Where to write the annotated PNG (default: <image>_grounded.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the `describe` command.
pub async fn describe(args: DescribeArgs, config: &Config) -> anyhow::Result<()> {
    let source = image_source(&args.image)?;
    let prompt = args.prompt.as_deref().unwrap_or(DEFAULT_VISION_PROMPT);

    let session = session(config)?;
    let bar = spinner("Analyzing image...");
    let outcome = session.describe_image(prompt, source).await;
    bar.finish_and_clear();

    report("Description:", outcome);
    Ok(())
}

/// Execute the `analyze` command.
pub async fn analyze(args: AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let sources = args
        .images
        .iter()
        .map(|arg| image_source(arg))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let prompt = args.prompt.as_deref().unwrap_or(DEFAULT_VISION_PROMPT);

    let session = session(config)?;
    let bar = spinner("Analyzing images...");
    let outcome = session.analyze_images(prompt, sources).await;
    bar.finish_and_clear();

    report("Analysis:", outcome);
    Ok(())
}

/// Execute the `ground` command.
pub async fn ground(args: GroundArgs, config: &Config) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.image).map_err(|e| {
        anyhow::anyhow!("Failed to read image {}: {e}", args.image.display())
    })?;
    let format = extension_format(&args.image.to_string_lossy());

    let session = session(config)?;
    let bar = spinner("Grounding...");
    let outcome = session.ground(&bytes, &format, args.prompt.as_deref()).await;
    bar.finish_and_clear();

    let grounding = match outcome {
        Ok(grounding) => grounding,
        Err(err) => {
            print_error(&err);
            return Ok(());
        }
    };

    let output = args.output.unwrap_or_else(|| grounded_path(&args.image));
    std::fs::write(&output, &grounding.overlay.png)?;

    render_grounding(&grounding, &output);
    Ok(())
}

/// Print the grounding summary: legend, output path, and the raw reply.
pub fn render_grounding(grounding: &Grounding, output: &std::path::Path) {
    let green = Style::new().for_stderr().green().bold();
    let dim = Style::new().for_stderr().dim();

    if grounding.tools.is_empty() {
        eprintln!("{}", green.apply_to("No tools located."));
    } else {
        eprintln!(
            "{}",
            green.apply_to(format!("Located {} tool(s):", grounding.tools.len()))
        );
        for (tool, entry) in grounding.tools.iter().zip(&grounding.overlay.legend) {
            eprintln!(
                "  {:<10} {}  {}",
                entry.color,
                tool.name,
                dim.apply_to(format!(
                    "[{:.2}, {:.2}, {:.2}, {:.2}]",
                    tool.bbox.x1, tool.bbox.y1, tool.bbox.x2, tool.bbox.y2
                ))
            );
        }
        eprintln!("  {}", dim.apply_to(format!("Overlay: {}", output.display())));
    }

    eprintln!();
    eprintln!("{}", dim.apply_to("Model reply:"));
    println!("{}", grounding.reply);
}

/// Sibling path with `_grounded.png` appended to the file stem.
fn grounded_path(image: &std::path::Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{stem}_grounded.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounded_path() {
        let path = grounded_path(std::path::Path::new("/tmp/bench.jpg"));
        assert_eq!(path, PathBuf::from("/tmp/bench_grounded.png"));
    }
}
