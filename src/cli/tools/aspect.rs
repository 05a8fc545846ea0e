use clap::{ArgGroup, Args};
use serde::Serialize;

use crate::config::{Config, OutputFormat};
use crate::core::aspect::{self, AspectError, AspectRatio, Dimension, Dimensions, RatioPreset};
use crate::error::{DesignKitError, Result};

use super::copy_to_clipboard;

#[derive(Args)]
#[command(group(ArgGroup::new("side").required(true).args(["width", "height"])))]
pub struct AspectArgs {
    /// Aspect ratio as W:H (defaults to the configured ratio)
    #[arg(short, long, value_name = "W:H")]
    pub ratio: Option<String>,

    /// Known width; the height is derived
    #[arg(long)]
    pub width: Option<f64>,

    /// Known height; the width is derived
    #[arg(long)]
    pub height: Option<f64>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Copy the derived dimension to the clipboard
    #[arg(long)]
    pub copy: bool,
}

#[derive(Debug, Serialize)]
struct AspectReport {
    ratio: String,
    width: f64,
    height: f64,
}

/// Resolve the ratio to use: the flag wins, then the configured default.
pub fn resolve_ratio(flag: Option<&str>, config: &Config) -> std::result::Result<AspectRatio, AspectError> {
    let preset = RatioPreset::parse(flag.unwrap_or(&config.default_aspect_ratio))?;
    preset.ratio().ok_or(AspectError::CustomRatio)
}

pub async fn execute(args: AspectArgs, config: &Config) -> Result<()> {
    let ratio = resolve_ratio(args.ratio.as_deref(), config)?;

    let known = match (args.width, args.height) {
        (Some(width), _) => Dimension::Width(width),
        (None, Some(height)) => Dimension::Height(height),
        (None, None) => {
            return Err(DesignKitError::Validation("either --width or --height is required".to_string()));
        }
    };

    let dims = aspect::solve(ratio, known)?;
    let derived = match known {
        Dimension::Width(_) => dims.height,
        Dimension::Height(_) => dims.width,
    };

    match args.format.unwrap_or(config.output_format) {
        OutputFormat::Text => println!("{}", render_text(ratio, dims)),
        OutputFormat::Json => {
            let report = AspectReport { ratio: ratio.to_string(), width: dims.width, height: dims.height };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if args.copy || config.copy_by_default {
        copy_to_clipboard(&aspect::format_dimension(derived));
    }

    Ok(())
}

pub fn render_text(ratio: AspectRatio, dims: Dimensions) -> String {
    format!(
        "{} x {} ({})",
        aspect::format_dimension(dims.width),
        aspect::format_dimension(dims.height),
        ratio
    )
}
