use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

use crate::config::{Config, OutputFormat};
use crate::core::clipboard::{ClipboardSink, Osc52Clipboard};
use crate::core::contrast::{self, ContrastOutcome, RankedResult};
use crate::error::Result;

use super::copy_with;

#[derive(Args)]
pub struct ContrastArgs {
    /// Foreground colors as #rgb or #rrggbb (quote them in your shell); invalid entries are ignored
    #[arg(value_name = "COLOR", required = true)]
    pub colors: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Copy the best background to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// JSON shape of a contrast run.
#[derive(Debug, Serialize)]
pub struct ContrastReport<'a> {
    pub status: &'static str,
    pub results: &'a [RankedResult],
}

impl<'a> From<&'a ContrastOutcome> for ContrastReport<'a> {
    fn from(outcome: &'a ContrastOutcome) -> Self {
        let status = match outcome {
            ContrastOutcome::NoForegroundColors => "no-foreground-colors",
            ContrastOutcome::Ranked(_) => "ranked",
        };
        Self { status, results: outcome.results() }
    }
}

pub async fn execute(args: ContrastArgs, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    run(args, config, &mut stdout.lock(), &mut Osc52Clipboard::stderr())
}

/// Score, write the report to `out` and copy the best background to `clipboard`.
pub(crate) fn run<W: Write, C: ClipboardSink>(
    args: ContrastArgs,
    config: &Config,
    out: &mut W,
    clipboard: &mut C,
) -> Result<()> {
    let outcome = contrast::score(&args.colors);
    let valid = contrast::parse_foregrounds(&args.colors).len();
    if valid < args.colors.len() {
        info!("Ignored {} invalid color(s)", args.colors.len() - valid);
    }

    match args.format.unwrap_or(config.output_format) {
        OutputFormat::Text => write!(out, "{}", render_text(&outcome, valid))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&ContrastReport::from(&outcome))?)?,
    }
    out.flush()?;

    if args.copy || config.copy_by_default {
        if let Some(best) = outcome.best() {
            copy_with(clipboard, &best.background_color.to_hex());
        }
    }

    Ok(())
}

pub fn render_text(outcome: &ContrastOutcome, foreground_count: usize) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    match outcome {
        ContrastOutcome::NoForegroundColors => {
            out.push_str("No valid foreground colors; nothing to rank.\n");
        }
        ContrastOutcome::Ranked(results) => {
            let _ = writeln!(
                out,
                "Best backgrounds for {} foreground color{} (worst-case contrast):",
                foreground_count,
                if foreground_count == 1 { "" } else { "s" }
            );
            for (rank, result) in results.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {}  {:>8}  {}",
                    rank + 1,
                    result.background_color,
                    result.ratio_label(),
                    result.tier
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output_lists_ranked_backgrounds() {
        let outcome = contrast::score(&["#fff"]);
        let text = render_text(&outcome, 1);
        assert!(text.starts_with("Best backgrounds for 1 foreground color (worst-case contrast):"));
        assert!(text.contains("  1. #000000   21.00:1  AAA"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_text_output_for_empty_state() {
        let text = render_text(&ContrastOutcome::NoForegroundColors, 0);
        assert_eq!(text, "No valid foreground colors; nothing to rank.\n");
    }

    #[test]
    fn test_json_report_shape() {
        let outcome = contrast::score(&["#FFFFFF", "bogus"]);
        let json = serde_json::to_value(ContrastReport::from(&outcome)).unwrap();
        assert_eq!(json["status"], "ranked");
        assert_eq!(json["results"].as_array().unwrap().len(), 5);
        assert_eq!(json["results"][0]["backgroundColor"], "#000000");
        assert_eq!(json["results"][0]["tier"], "AAA");

        let empty = ContrastOutcome::NoForegroundColors;
        let json = serde_json::to_value(ContrastReport::from(&empty)).unwrap();
        assert_eq!(json["status"], "no-foreground-colors");
        assert!(json["results"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_report_stays_parseable_when_copying() {
        let args = ContrastArgs {
            colors: vec!["#fff".to_string()],
            format: Some(OutputFormat::Json),
            copy: true,
        };
        let mut out = Vec::new();
        let mut terminal = Osc52Clipboard::new(Vec::new(), true);

        run(args, &Config::default(), &mut out, &mut terminal).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["results"][0]["backgroundColor"], "#000000");
        let copied = String::from_utf8(terminal.into_inner()).unwrap();
        assert_eq!(copied, crate::core::clipboard::osc52_sequence("#000000"));
    }

    #[test]
    fn test_copy_by_default_without_terminal_keeps_output_clean() {
        let config = Config { copy_by_default: true, ..Config::default() };
        let args = ContrastArgs {
            colors: vec!["#fff".to_string()],
            format: Some(OutputFormat::Json),
            copy: false,
        };
        let mut out = Vec::new();
        let mut piped = Osc52Clipboard::new(Vec::new(), false);

        run(args, &config, &mut out, &mut piped).unwrap();

        assert!(serde_json::from_slice::<serde_json::Value>(&out).is_ok());
        assert!(!String::from_utf8(out).unwrap().contains('\x1b'));
        assert!(piped.into_inner().is_empty());
    }
}
