use clap::{Parser, Subcommand};

mod cli;
mod config;
mod core;
mod error;
mod ui;
mod utils;

use cli::*;
use config::Config;
use error::Result;

#[derive(Parser)]
#[command(name = "designkit")]
#[command(about = "Aspect ratios, WCAG contrast and typography scales from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank grayscale backgrounds by worst-case contrast against foreground colors
    Contrast(contrast::ContrastArgs),

    /// Derive the missing side of a rectangle from an aspect ratio
    Aspect(aspect::AspectArgs),

    /// Generate a golden-ratio typography scale
    TypeScale(typescale::TypeScaleArgs),

    /// Open the interactive tool shell
    Shell(cli::shell::ShellArgs),

    /// Show or change configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The shell owns the screen; log lines would corrupt it
    let suppress_logs = matches!(cli.command, Commands::Shell(_));

    // Initialize logging
    utils::logging::init_logging(cli.verbose, suppress_logs)
        .map_err(error::DesignKitError::Internal)?;

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Contrast(args) => contrast::execute(args, &config).await,
        Commands::Aspect(args) => aspect::execute(args, &config).await,
        Commands::TypeScale(args) => typescale::execute(args, &config).await,
        Commands::Shell(args) => cli::shell::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args, &config, cli.config.as_deref()).await,
    }
}
