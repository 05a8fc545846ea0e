use clap::Args;
use std::fmt::Write;

use crate::config::{Config, OutputFormat};
use crate::core::typography::{self, ScaleAnchor, ScaleStep};
use crate::error::{DesignKitError, Result};

use super::copy_to_clipboard;

#[derive(Args)]
pub struct TypeScaleArgs {
    /// Base font size in px (defaults to the configured size)
    #[arg(short, long)]
    pub base: Option<f64>,

    /// Where the base sits in the scale: smallest, medium or largest
    #[arg(short, long)]
    pub anchor: Option<ScaleAnchor>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Copy one step (XS, S, M, L or XL) to the clipboard as a CSS value
    #[arg(long, value_name = "LABEL")]
    pub copy: Option<String>,
}

pub async fn execute(args: TypeScaleArgs, config: &Config) -> Result<()> {
    let base = args.base.unwrap_or(config.base_font_size);
    let anchor = args.anchor.unwrap_or(config.scale_anchor);

    let scale = typography::type_scale(base, anchor).ok_or_else(|| {
        DesignKitError::Validation(format!("base font size must be a positive number, got {}", base))
    })?;

    match args.format.unwrap_or(config.output_format) {
        OutputFormat::Text => print!("{}", render_text(&scale, anchor)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scale)?),
    }

    if let Some(label) = args.copy {
        let step = find_step(&scale, &label).ok_or_else(|| {
            DesignKitError::Validation(format!("unknown scale step '{}' (use XS, S, M, L or XL)", label))
        })?;
        copy_to_clipboard(&step.css_value());
    }

    Ok(())
}

pub fn find_step<'a>(scale: &'a [ScaleStep], label: &str) -> Option<&'a ScaleStep> {
    scale.iter().find(|s| s.label.eq_ignore_ascii_case(label.trim()))
}

pub fn render_text(scale: &[ScaleStep], anchor: ScaleAnchor) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Golden-ratio scale (base is the {} step):", anchor);
    for step in scale {
        let _ = writeln!(out, "  {:<3} {}", step.label, step.css_value());
    }
    out
}
