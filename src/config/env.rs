use std::env;
use std::str::FromStr;
use crate::error::{Result, DesignKitError};

/// Environment variable configuration constants
pub struct EnvVars;

impl EnvVars {
    pub const DEBOUNCE_MS: &'static str = "DESIGNKIT_DEBOUNCE_MS";
    pub const OUTPUT_FORMAT: &'static str = "DESIGNKIT_OUTPUT_FORMAT";
    pub const DEFAULT_ASPECT_RATIO: &'static str = "DESIGNKIT_DEFAULT_ASPECT_RATIO";
    pub const BASE_FONT_SIZE: &'static str = "DESIGNKIT_BASE_FONT_SIZE";
    pub const SCALE_ANCHOR: &'static str = "DESIGNKIT_SCALE_ANCHOR";
    pub const COPY_BY_DEFAULT: &'static str = "DESIGNKIT_COPY_BY_DEFAULT";

    // Special environment variables
    pub const CI: &'static str = "CI";
    pub const FORCE_TERMINAL_UI: &'static str = "DESIGNKIT_FORCE_TERMINAL_UI";

    pub const PREFIX: &'static str = "DESIGNKIT_";
}

/// Environment variable parsing utilities with validation
pub struct EnvParser;

impl EnvParser {
    /// Parse environment variable as string with validation
    pub fn parse_string(var_name: &str, validator: Option<fn(&str) -> Result<()>>) -> Result<Option<String>> {
        match env::var(var_name) {
            Ok(value) => {
                let trimmed = value.trim().to_string();
                if trimmed.is_empty() {
                    return Ok(None);
                }

                if let Some(validate_fn) = validator {
                    validate_fn(&trimmed)?;
                }

                Ok(Some(trimmed))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(DesignKitError::Validation(format!(
                    "Environment variable {} contains invalid UTF-8",
                    var_name
                )))
            }
        }
    }

    /// Parse environment variable as boolean with validation
    pub fn parse_bool(var_name: &str) -> Result<Option<bool>> {
        if let Some(value_str) = Self::parse_string(var_name, None)? {
            parse_bool_value(&value_str)
                .map(Some)
                .map_err(|_| DesignKitError::Validation(format!(
                    "Invalid boolean value in {}: '{}'. Use: true/false, 1/0, yes/no, on/off",
                    var_name, value_str
                )))
        } else {
            Ok(None)
        }
    }

    /// Parse environment variable as u64 with range validation
    pub fn parse_u64(var_name: &str, min: u64, max: u64) -> Result<Option<u64>> {
        if let Some(value_str) = Self::parse_string(var_name, None)? {
            let value = value_str.parse::<u64>().map_err(|_| {
                DesignKitError::Validation(format!(
                    "Invalid number in {}: '{}'. Must be a positive integer",
                    var_name, value_str
                ))
            })?;

            if value < min || value > max {
                return Err(DesignKitError::Validation(format!(
                    "Value in {} must be between {} and {}, got {}",
                    var_name, min, max, value
                )));
            }

            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// Parse environment variable with the type's `FromStr`
    pub fn parse_value<T>(var_name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        if let Some(value_str) = Self::parse_string(var_name, None)? {
            value_str.parse::<T>().map(Some).map_err(|e| {
                DesignKitError::Validation(format!("Invalid value in {}: {}", var_name, e))
            })
        } else {
            Ok(None)
        }
    }

    /// Get all DESIGNKIT environment variables for debugging
    pub fn get_all_designkit_vars() -> Vec<(String, String)> {
        env::vars()
            .filter(|(key, _)| key.starts_with(EnvVars::PREFIX))
            .collect()
    }
}

/// Accepts true/false, 1/0, yes/no, on/off (any case).
pub fn parse_bool_value(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(DesignKitError::Validation(format!(
            "Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::env;

    #[test]
    fn test_parse_bool() {
        env::set_var("DESIGNKIT_TEST_BOOL_TRUE", "yes");
        env::set_var("DESIGNKIT_TEST_BOOL_FALSE", "0");
        env::set_var("DESIGNKIT_TEST_BOOL_INVALID", "maybe");

        assert_eq!(EnvParser::parse_bool("DESIGNKIT_TEST_BOOL_TRUE").unwrap(), Some(true));
        assert_eq!(EnvParser::parse_bool("DESIGNKIT_TEST_BOOL_FALSE").unwrap(), Some(false));
        assert!(EnvParser::parse_bool("DESIGNKIT_TEST_BOOL_INVALID").is_err());
        assert_eq!(EnvParser::parse_bool("DESIGNKIT_TEST_BOOL_NOT_SET").unwrap(), None);

        env::remove_var("DESIGNKIT_TEST_BOOL_TRUE");
        env::remove_var("DESIGNKIT_TEST_BOOL_FALSE");
        env::remove_var("DESIGNKIT_TEST_BOOL_INVALID");
    }

    #[test]
    fn test_parse_u64() {
        env::set_var("DESIGNKIT_TEST_U64_VALID", "420");
        env::set_var("DESIGNKIT_TEST_U64_OUT_OF_RANGE", "9000");
        env::set_var("DESIGNKIT_TEST_U64_INVALID", "soon");

        assert_eq!(EnvParser::parse_u64("DESIGNKIT_TEST_U64_VALID", 50, 5000).unwrap(), Some(420));
        assert!(EnvParser::parse_u64("DESIGNKIT_TEST_U64_OUT_OF_RANGE", 50, 5000).is_err());
        assert!(EnvParser::parse_u64("DESIGNKIT_TEST_U64_INVALID", 50, 5000).is_err());
        assert_eq!(EnvParser::parse_u64("DESIGNKIT_TEST_U64_NOT_SET", 50, 5000).unwrap(), None);

        env::remove_var("DESIGNKIT_TEST_U64_VALID");
        env::remove_var("DESIGNKIT_TEST_U64_OUT_OF_RANGE");
        env::remove_var("DESIGNKIT_TEST_U64_INVALID");
    }

    #[test]
    fn test_parse_value() {
        env::set_var("DESIGNKIT_TEST_FORMAT", " json ");
        env::set_var("DESIGNKIT_TEST_FORMAT_BAD", "xml");

        assert_eq!(EnvParser::parse_value::<OutputFormat>("DESIGNKIT_TEST_FORMAT").unwrap(), Some(OutputFormat::Json));
        assert!(EnvParser::parse_value::<OutputFormat>("DESIGNKIT_TEST_FORMAT_BAD").is_err());
        assert_eq!(EnvParser::parse_value::<f64>("DESIGNKIT_TEST_FORMAT_NOT_SET").unwrap(), None);

        env::remove_var("DESIGNKIT_TEST_FORMAT");
        env::remove_var("DESIGNKIT_TEST_FORMAT_BAD");
    }
}
