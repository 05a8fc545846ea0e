use crate::core::aspect::RatioPreset;
use crate::error::{Result, DesignKitError};

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate numeric range
    pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        // written so NaN fails too
        if !(value >= min && value <= max) {
            return Err(DesignKitError::Validation(format!(
                "{} must be between {} and {}, got {}",
                field_name, min, max, value
            )));
        }
        Ok(())
    }

    /// Validate a ratio preset string (`W:H` or `custom`)
    pub fn validate_aspect_ratio(value: &str) -> Result<()> {
        RatioPreset::parse(value).map_err(|e| {
            DesignKitError::Validation(format!("default aspect ratio: {}", e))
        })?;
        Ok(())
    }

    /// Validate a base font size in px
    pub fn validate_font_size(value: f64) -> Result<()> {
        if value <= 0.0 {
            return Err(DesignKitError::Validation(format!(
                "base font size must be positive, got {}",
                value
            )));
        }
        Self::validate_range(value, 0.0, 512.0, "base font size")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(ConfigValidator::validate_range(400u64, 50u64, 5000u64, "debounce").is_ok());
        assert!(ConfigValidator::validate_range(10u64, 50u64, 5000u64, "debounce").is_err());
        assert!(ConfigValidator::validate_range(6000u64, 50u64, 5000u64, "debounce").is_err());
        assert!(ConfigValidator::validate_range(f64::NAN, 0.0, 1.0, "nan").is_err());
    }

    #[test]
    fn test_validate_aspect_ratio() {
        assert!(ConfigValidator::validate_aspect_ratio("16:9").is_ok());
        assert!(ConfigValidator::validate_aspect_ratio("custom").is_ok());
        assert!(ConfigValidator::validate_aspect_ratio("wide").is_err());
        assert!(ConfigValidator::validate_aspect_ratio("16:0").is_err());
    }

    #[test]
    fn test_validate_font_size() {
        assert!(ConfigValidator::validate_font_size(16.0).is_ok());
        assert!(ConfigValidator::validate_font_size(0.0).is_err());
        assert!(ConfigValidator::validate_font_size(-2.0).is_err());
        assert!(ConfigValidator::validate_font_size(1000.0).is_err());
    }
}
