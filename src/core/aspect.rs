//! Aspect-ratio calculator
//!
//! Given one side of a rectangle and a `W:H` ratio, derive the other side.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AspectError {
    #[error("invalid aspect ratio '{input}' (expected W:H with positive numbers)")]
    InvalidRatio { input: String },

    #[error("{field} must be a positive number, got '{value}'")]
    InvalidDimension { field: &'static str, value: String },

    #[error("custom ratio has no fixed proportions")]
    CustomRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    pub fn new(width: f64, height: f64) -> Result<Self, AspectError> {
        if is_positive(width) && is_positive(height) {
            Ok(Self { width, height })
        } else {
            Err(AspectError::InvalidRatio { input: format!("{}:{}", width, height) })
        }
    }

    pub fn parse(input: &str) -> Result<Self, AspectError> {
        let invalid = || AspectError::InvalidRatio { input: input.to_string() };
        let (w, h) = input.trim().split_once(':').ok_or_else(invalid)?;
        let width = w.trim().parse::<f64>().map_err(|_| invalid())?;
        let height = h.trim().parse::<f64>().map_err(|_| invalid())?;
        Self::new(width, height).map_err(|_| invalid())
    }

    pub fn height_for_width(&self, width: f64) -> Option<f64> {
        is_positive(width).then(|| round_to(width * self.height / self.width, 2))
    }

    pub fn width_for_height(&self, height: f64) -> Option<f64> {
        is_positive(height).then(|| round_to(height * self.width / self.height, 2))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = AspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::parse(s)
    }
}

/// Ratio buttons, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioPreset {
    Fixed(AspectRatio),
    Custom,
}

impl RatioPreset {
    pub const ALL: [RatioPreset; 6] = [
        RatioPreset::Fixed(AspectRatio { width: 16.0, height: 9.0 }),
        RatioPreset::Fixed(AspectRatio { width: 4.0, height: 3.0 }),
        RatioPreset::Fixed(AspectRatio { width: 21.0, height: 9.0 }),
        RatioPreset::Fixed(AspectRatio { width: 1.0, height: 1.0 }),
        RatioPreset::Fixed(AspectRatio { width: 9.0, height: 16.0 }),
        RatioPreset::Custom,
    ];

    /// Accepts `custom` (any case) or a `W:H` ratio.
    pub fn parse(input: &str) -> Result<Self, AspectError> {
        if input.trim().eq_ignore_ascii_case("custom") {
            Ok(RatioPreset::Custom)
        } else {
            AspectRatio::parse(input).map(RatioPreset::Fixed)
        }
    }

    pub fn ratio(&self) -> Option<AspectRatio> {
        match self {
            RatioPreset::Fixed(ratio) => Some(*ratio),
            RatioPreset::Custom => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            RatioPreset::Fixed(ratio) => ratio.to_string(),
            RatioPreset::Custom => "Custom".to_string(),
        }
    }

    /// Index of this preset in [`RatioPreset::ALL`], if it is one of them.
    pub fn position(&self) -> Option<usize> {
        Self::ALL.iter().position(|p| p == self)
    }
}

/// The side the user typed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Width(f64),
    Height(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Fill in the missing side of `known` for `ratio`.
pub fn solve(ratio: AspectRatio, known: Dimension) -> Result<Dimensions, AspectError> {
    match known {
        Dimension::Width(width) => ratio
            .height_for_width(width)
            .map(|height| Dimensions { width, height })
            .ok_or(AspectError::InvalidDimension { field: "width", value: width.to_string() }),
        Dimension::Height(height) => ratio
            .width_for_height(height)
            .map(|width| Dimensions { width, height })
            .ok_or(AspectError::InvalidDimension { field: "height", value: height.to_string() }),
    }
}

/// Format a dimension without trailing zeros (`1080`, `562.5`).
pub fn format_dimension(value: f64) -> String {
    let rounded = round_to(value, 2);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ratio() {
        assert_eq!(AspectRatio::parse("16:9").unwrap(), AspectRatio { width: 16.0, height: 9.0 });
        assert_eq!(AspectRatio::parse(" 2.35 : 1 ").unwrap(), AspectRatio { width: 2.35, height: 1.0 });
        assert!(AspectRatio::parse("16x9").is_err());
        assert!(AspectRatio::parse("0:9").is_err());
        assert!(AspectRatio::parse("-4:3").is_err());
        assert!(AspectRatio::parse("a:b").is_err());
    }

    #[test]
    fn test_height_and_width_derivation() {
        let hd = AspectRatio::parse("16:9").unwrap();
        assert_eq!(hd.height_for_width(1920.0), Some(1080.0));
        assert_eq!(hd.width_for_height(1080.0), Some(1920.0));
        assert_eq!(hd.height_for_width(1000.0), Some(562.5));

        let cinema = AspectRatio::parse("21:9").unwrap();
        assert_eq!(cinema.height_for_width(100.0), Some(42.86));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let ratio = AspectRatio::parse("4:3").unwrap();
        assert_eq!(ratio.height_for_width(0.0), None);
        assert_eq!(ratio.width_for_height(-10.0), None);
        assert_eq!(ratio.height_for_width(f64::NAN), None);
        assert!(matches!(
            solve(ratio, Dimension::Width(0.0)),
            Err(AspectError::InvalidDimension { field: "width", .. })
        ));
    }

    #[test]
    fn test_solve() {
        let ratio = AspectRatio::parse("4:3").unwrap();
        assert_eq!(
            solve(ratio, Dimension::Height(600.0)).unwrap(),
            Dimensions { width: 800.0, height: 600.0 }
        );
    }

    #[test]
    fn test_presets() {
        assert_eq!(RatioPreset::ALL[0].label(), "16:9");
        assert_eq!(RatioPreset::ALL[5], RatioPreset::Custom);
        assert_eq!(RatioPreset::parse("CUSTOM").unwrap(), RatioPreset::Custom);
        assert_eq!(RatioPreset::parse("9:16").unwrap().position(), Some(4));
        assert_eq!(RatioPreset::parse("3:2").unwrap().position(), None);
        assert!(RatioPreset::Custom.ratio().is_none());
    }

    #[test]
    fn test_format_dimension() {
        assert_eq!(format_dimension(1080.0), "1080");
        assert_eq!(format_dimension(562.5), "562.5");
        assert_eq!(format_dimension(42.857), "42.86");
    }
}
