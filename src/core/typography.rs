//! Golden-ratio typography scale

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::aspect::round_to;

pub const PHI: f64 = 1.61803398875;

pub const SCALE_LABELS: [&str; 5] = ["XS", "S", "M", "L", "XL"];

/// Where the base size sits within the five generated steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleAnchor {
    /// Base is the smallest step.
    #[default]
    Smallest,
    /// Base is the middle step.
    Medium,
    /// Base is the largest step.
    Largest,
}

impl ScaleAnchor {
    pub const ALL: [ScaleAnchor; 3] = [ScaleAnchor::Smallest, ScaleAnchor::Medium, ScaleAnchor::Largest];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleAnchor::Smallest => "smallest",
            ScaleAnchor::Medium => "medium",
            ScaleAnchor::Largest => "largest",
        }
    }

    /// Power of φ applied to the base for each of the five steps.
    fn exponents(&self) -> [i32; 5] {
        match self {
            ScaleAnchor::Smallest => [0, 1, 2, 3, 4],
            ScaleAnchor::Medium => [-2, -1, 0, 1, 2],
            ScaleAnchor::Largest => [-4, -3, -2, -1, 0],
        }
    }
}

impl fmt::Display for ScaleAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smallest" => Ok(ScaleAnchor::Smallest),
            "medium" => Ok(ScaleAnchor::Medium),
            "largest" => Ok(ScaleAnchor::Largest),
            other => Err(format!("unknown scale anchor '{}' (use smallest, medium or largest)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleStep {
    pub label: &'static str,
    pub size: f64,
}

impl ScaleStep {
    /// CSS value, e.g. `25.9px`.
    pub fn css_value(&self) -> String {
        format!("{}px", self.size)
    }
}

/// Five sizes around `base`, rounded to one decimal.
///
/// Returns `None` when `base` is not a positive finite number.
pub fn type_scale(base: f64, anchor: ScaleAnchor) -> Option<Vec<ScaleStep>> {
    if !base.is_finite() || base <= 0.0 {
        return None;
    }

    let steps = anchor
        .exponents()
        .iter()
        .zip(SCALE_LABELS)
        .map(|(exp, label)| ScaleStep { label, size: round_to(base * PHI.powi(*exp), 1) })
        .collect();

    Some(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(base: f64, anchor: ScaleAnchor) -> Vec<f64> {
        type_scale(base, anchor).unwrap().into_iter().map(|s| s.size).collect()
    }

    #[test]
    fn test_smallest_anchor_grows_from_base() {
        assert_eq!(sizes(16.0, ScaleAnchor::Smallest), vec![16.0, 25.9, 41.9, 67.8, 109.7]);
    }

    #[test]
    fn test_medium_anchor_centers_base() {
        assert_eq!(sizes(16.0, ScaleAnchor::Medium), vec![6.1, 9.9, 16.0, 25.9, 41.9]);
    }

    #[test]
    fn test_largest_anchor_ends_at_base() {
        assert_eq!(sizes(16.0, ScaleAnchor::Largest), vec![2.3, 3.8, 6.1, 9.9, 16.0]);
    }

    #[test]
    fn test_labels_and_css() {
        let scale = type_scale(16.0, ScaleAnchor::Smallest).unwrap();
        let labels: Vec<&str> = scale.iter().map(|s| s.label).collect();
        assert_eq!(labels, SCALE_LABELS);
        assert_eq!(scale[1].css_value(), "25.9px");
        assert_eq!(scale[0].css_value(), "16px");
    }

    #[test]
    fn test_invalid_base_hides_scale() {
        assert!(type_scale(0.0, ScaleAnchor::Medium).is_none());
        assert!(type_scale(-4.0, ScaleAnchor::Medium).is_none());
        assert!(type_scale(f64::INFINITY, ScaleAnchor::Medium).is_none());
    }

    #[test]
    fn test_anchor_from_str() {
        assert_eq!("Medium".parse::<ScaleAnchor>().unwrap(), ScaleAnchor::Medium);
        assert!("huge".parse::<ScaleAnchor>().is_err());
    }
}
