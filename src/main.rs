use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tui_carousel::config::{resolve_reduced_motion, Config};
use tui_carousel::deck::load_deck;
use tui_carousel::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "tui-carousel", version, about = "Terminal slideshow with autoplay and swipe")]
struct Cli {
    /// Path to a TOML config file (default: ~/.config/tui-carousel/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the autoplay interval
    #[arg(long, value_name = "MILLIS")]
    interval_ms: Option<u64>,

    /// Never advance slides automatically
    #[arg(long)]
    reduced_motion: bool,

    /// Text files to show as slides, in order (default: slides from config)
    #[arg(value_name = "SLIDE")]
    slides: Vec<PathBuf>,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    if let Some(interval_ms) = cli.interval_ms {
        config.autoplay.interval_ms = interval_ms;
        config.validate().context("validating --interval-ms")?;
    }

    let slides = load_deck(&cli.slides, &config.slides).context("loading slides")?;
    let reduced_motion = resolve_reduced_motion(&config, cli.reduced_motion);
    tracing::info!(slides = slides.len(), reduced_motion, "starting");

    tui_carousel::ui::run(slides, &config, reduced_motion).context("running terminal UI")?;
    Ok(())
}
