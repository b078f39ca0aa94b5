//! LoreCraft CLI
//!
//! Drives the landing page headless with synthetic frame deltas and logs
//! every event the choreography emits.

mod config;
mod play;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lorecraft_theme::{ThemeName, Viewport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::StageConfig;

#[derive(Parser)]
#[command(name = "lorecraft")]
#[command(about = "Play the LoreCraft landing-page choreography headless")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the home screen for a while and log what happens
    Play(PlayArgs),

    /// Print a resolved theme as TOML
    Theme(ThemeArgs),
}

/// Window and theme selection shared by every command
#[derive(Args, Debug)]
struct StageArgs {
    /// Config file (defaults to lorecraft.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme preset (dark, broken)
    #[arg(long)]
    theme: Option<ThemeName>,

    /// Window width
    #[arg(long, requires = "height")]
    width: Option<f32>,

    /// Window height
    #[arg(long, requires = "width")]
    height: Option<f32>,
}

impl StageArgs {
    fn load(&self) -> Result<StageConfig> {
        let mut config = StageConfig::load(self.config.as_deref())?;
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            config.viewport = Viewport::new(width, height);
        }
        Ok(config)
    }
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// Play the images alone with the fast card entrance
    #[arg(long)]
    fast: bool,

    /// Start as a returning visitor who already reached the cats
    #[arg(long)]
    cat: bool,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Length of the run in seconds
    #[arg(long)]
    seconds: Option<f32>,

    /// Press the theme buttons in order at this many seconds
    #[arg(long)]
    break_theme_at: Option<f32>,

    /// Navigate through the side menu at this many seconds
    #[arg(long)]
    navigate_at: Option<f32>,
}

#[derive(Args, Debug)]
struct ThemeArgs {
    #[command(flatten)]
    stage: StageArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Play(args) => cmd_play(args),
        Commands::Theme(args) => cmd_theme(args),
    }
}

fn cmd_play(args: PlayArgs) -> Result<()> {
    let mut config = args.stage.load()?;
    config.fast |= args.fast;
    if let Some(fps) = args.fps {
        config.fps = fps;
    }
    if let Some(seconds) = args.seconds {
        config.seconds = seconds;
    }

    play::run(
        &config,
        play::Script {
            returning_cat: args.cat,
            break_theme_at_ms: args.break_theme_at.map(|s| s * 1000.0),
            navigate_at_ms: args.navigate_at.map(|s| s * 1000.0),
        },
    )
}

fn cmd_theme(args: ThemeArgs) -> Result<()> {
    let config = args.stage.load()?;
    let theme = config.resolve_theme(config.theme);
    let output = toml::to_string_pretty(&theme).context("Failed to serialize theme")?;
    println!("{output}");
    Ok(())
}
