//! Command-line entry point: fetch a page and print its laid-out words.

use anyhow::Context;
use browser::{BrowserConfig, BrowserEngine, LoadOutcome};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "willow-browser", version, about = "A toy text browser")]
struct Cli {
    /// URL to load (scheme optional, http assumed).
    url: String,

    /// Page width in pixels.
    #[arg(long)]
    width: Option<f32>,

    /// Viewport height in pixels.
    #[arg(long)]
    height: Option<f32>,

    /// Uniform page margin in pixels.
    #[arg(long)]
    margin: Option<f32>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = BrowserConfig::default();
    if let Some(width) = cli.width {
        config = config.with_page_width(width);
    }
    if let Some(height) = cli.height {
        config = config.with_viewport_height(height);
    }
    if let Some(margin) = cli.margin {
        config = config.with_margin(margin);
    }

    let engine = BrowserEngine::new(config).context("failed to initialize browser")?;
    let outcome = engine
        .load(&cli.url)
        .await
        .with_context(|| format!("failed to load {}", cli.url))?;

    match outcome {
        LoadOutcome::Loaded(list) => {
            for item in &list {
                let mut flags = String::new();
                if item.style.is_bold() {
                    flags.push('b');
                }
                if item.style.is_italic() {
                    flags.push('i');
                }
                println!(
                    "{:>8.1} {:>8.1} {:>5.1} {:<2} {}",
                    item.position.x, item.position.y, item.style.size, flags, item.text
                );
            }
        }
        LoadOutcome::NoContent(reason) => {
            eprintln!("no content: {reason}");
        }
        LoadOutcome::Superseded => unreachable!("single navigation cannot be superseded"),
    }
    Ok(())
}
