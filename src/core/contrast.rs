//! Multi-foreground contrast finder
//!
//! Scores every swatch of a fixed grayscale palette against a set of
//! foreground colors. A swatch is only as good as its worst pairing, so the
//! score is the minimum contrast ratio across the set. Swatches are ranked by
//! that score and the best few are classified into WCAG tiers.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use super::color::Color;

/// Number of ranked backgrounds handed to the renderer.
pub const TOP_RESULTS: usize = 5;

/// Candidate backgrounds, black to white in steps of 0x11.
pub const BACKGROUND_PALETTE: [Color; 16] = [
    Color::BLACK,
    Color::gray(0x11),
    Color::gray(0x22),
    Color::gray(0x33),
    Color::gray(0x44),
    Color::gray(0x55),
    Color::gray(0x66),
    Color::gray(0x77),
    Color::gray(0x88),
    Color::gray(0x99),
    Color::gray(0xAA),
    Color::gray(0xBB),
    Color::gray(0xCC),
    Color::gray(0xDD),
    Color::gray(0xEE),
    Color::WHITE,
];

const AAA_THRESHOLD: f64 = 7.0;
const AA_THRESHOLD: f64 = 4.5;

/// WCAG compliance tier for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceTier {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    Fail,
}

impl ComplianceTier {
    pub fn classify(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            ComplianceTier::Aaa
        } else if ratio >= AA_THRESHOLD {
            ComplianceTier::Aa
        } else {
            ComplianceTier::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceTier::Aaa => "AAA",
            ComplianceTier::Aa => "AA",
            ComplianceTier::Fail => "Fail",
        }
    }
}

impl fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A palette swatch with its worst-case ratio against the foreground set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredBackground {
    pub background: Color,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub background_color: Color,
    pub ratio: f64,
    pub tier: ComplianceTier,
}

impl RankedResult {
    /// Ratio as shown to users, e.g. `4.54:1`.
    pub fn ratio_label(&self) -> String {
        format!("{:.2}:1", self.ratio)
    }
}

/// Result of scoring one snapshot of raw foreground rows.
#[derive(Debug, Clone, PartialEq)]
pub enum ContrastOutcome {
    /// Every row was blank or malformed; the results view stays hidden.
    NoForegroundColors,
    Ranked(Vec<RankedResult>),
}

impl ContrastOutcome {
    pub fn results(&self) -> &[RankedResult] {
        match self {
            ContrastOutcome::NoForegroundColors => &[],
            ContrastOutcome::Ranked(results) => results,
        }
    }

    pub fn best(&self) -> Option<&RankedResult> {
        self.results().first()
    }
}

/// WCAG contrast ratio between two colors. Symmetric, always within [1, 21].
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (bright, dark) = if la >= lb { (la, lb) } else { (lb, la) };
    (bright + 0.05) / (dark + 0.05)
}

/// Lowest ratio `background` reaches against any of `foregrounds`.
///
/// Returns `None` for an empty set rather than inventing a minimum.
pub fn worst_case_ratio(background: Color, foregrounds: &[Color]) -> Option<f64> {
    foregrounds
        .iter()
        .map(|fg| contrast_ratio(*fg, background))
        .reduce(f64::min)
}

/// Score every palette swatch, in palette order.
pub fn score_palette(foregrounds: &[Color]) -> Vec<ScoredBackground> {
    BACKGROUND_PALETTE
        .iter()
        .filter_map(|bg| {
            worst_case_ratio(*bg, foregrounds).map(|ratio| ScoredBackground { background: *bg, ratio })
        })
        .collect()
}

/// Rank the palette for `foregrounds`, best first, keeping [`TOP_RESULTS`].
///
/// The sort is stable, so exact ties stay in palette order.
pub fn rank_backgrounds(foregrounds: &[Color]) -> Vec<RankedResult> {
    let mut scored = score_palette(foregrounds);
    scored.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    scored
        .into_iter()
        .take(TOP_RESULTS)
        .map(|s| RankedResult {
            background_color: s.background,
            ratio: s.ratio,
            tier: ComplianceTier::classify(s.ratio),
        })
        .collect()
}

/// Parse raw foreground rows, dropping anything that is not a hex color.
pub fn parse_foregrounds<S: AsRef<str>>(inputs: &[S]) -> Vec<Color> {
    inputs
        .iter()
        .filter_map(|raw| match Color::parse(raw.as_ref()) {
            Ok(color) => Some(color),
            Err(e) => {
                trace!("Ignoring foreground row: {}", e);
                None
            }
        })
        .collect()
}

/// Score raw foreground rows.
pub fn score<S: AsRef<str>>(inputs: &[S]) -> ContrastOutcome {
    let foregrounds = parse_foregrounds(inputs);
    if foregrounds.is_empty() {
        debug!("No valid foreground colors among {} rows", inputs.len());
        return ContrastOutcome::NoForegroundColors;
    }

    let ranked = rank_backgrounds(&foregrounds);
    debug!(
        "Ranked {} backgrounds for {} foregrounds, best {:.2}",
        ranked.len(),
        foregrounds.len(),
        ranked.first().map(|r| r.ratio).unwrap_or(1.0)
    );
    ContrastOutcome::Ranked(ranked)
}
