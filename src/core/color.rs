//! sRGB colors parsed from hex notation
//!
//! Only `#rgb` and `#rrggbb` are accepted. Anything else is a
//! [`ColorParseError`], which callers treat as "ignore this input".

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("color must start with '#': {input}")]
    MissingHash { input: String },

    #[error("invalid hex length in {input} (expected #rgb or #rrggbb)")]
    InvalidLength { input: String },

    #[error("invalid hex digit in {input}")]
    InvalidHex { input: String },
}

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(0x00);
    pub const WHITE: Color = Color::gray(0xFF);

    pub(crate) const fn gray(level: u8) -> Self {
        Self { r: level, g: level, b: level }
    }

    /// Parse `#rgb` or `#rrggbb` (surrounding whitespace is ignored).
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash { input: trimmed.to_string() })?;

        let invalid_hex = || ColorParseError::InvalidHex { input: trimmed.to_string() };
        let bytes = digits.as_bytes();

        match bytes.len() {
            3 => {
                let r = nibble(bytes[0]).ok_or_else(invalid_hex)?;
                let g = nibble(bytes[1]).ok_or_else(invalid_hex)?;
                let b = nibble(bytes[2]).ok_or_else(invalid_hex)?;

                // #abc -> #aabbcc
                Ok(Self { r: r * 17, g: g * 17, b: b * 17 })
            }
            6 => {
                let pair = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
                    let h = nibble(hi).ok_or_else(invalid_hex)?;
                    let l = nibble(lo).ok_or_else(invalid_hex)?;
                    Ok(h << 4 | l)
                };

                Ok(Self {
                    r: pair(bytes[0], bytes[1])?,
                    g: pair(bytes[2], bytes[3])?,
                    b: pair(bytes[4], bytes[5])?,
                })
            }
            _ => Err(ColorParseError::InvalidLength { input: trimmed.to_string() }),
        }
    }

    /// Canonical uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in [0, 1].
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Gamma-expand one 8-bit channel. The 0.03928 knee is the one WCAG 2.x publishes.
fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
