use crate::config::env::{parse_bool_value, EnvParser, EnvVars};
use crate::config::validation::ConfigValidator;
use crate::config::{Config, OutputFormat};
use crate::core::typography::ScaleAnchor;
use crate::error::{ConfigError, DesignKitError, Result};

/// Keys accepted by `config get` / `config set`, with a short description.
pub const CONFIG_KEYS: [(&str, &str); 6] = [
    ("debounce_ms", "Quiet period before the contrast finder recomputes (50-5000 ms)"),
    ("output_format", "Default output format: text or json"),
    ("default_aspect_ratio", "Preselected aspect ratio, W:H or custom"),
    ("base_font_size", "Base font size for the type scale in px (0-512)"),
    ("scale_anchor", "Type scale anchor: smallest, medium or largest"),
    ("copy_by_default", "Copy the primary result without --copy (true/false)"),
];

/// Configuration builder with validation and type safety
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    debounce_ms: Option<u64>,
    output_format: Option<OutputFormat>,
    default_aspect_ratio: Option<String>,
    base_font_size: Option<f64>,
    scale_anchor: Option<ScaleAnchor>,
    copy_by_default: Option<bool>,
}

impl ConfigBuilder {
    /// Start from an existing configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            debounce_ms: Some(config.debounce_ms),
            output_format: Some(config.output_format),
            default_aspect_ratio: Some(config.default_aspect_ratio.clone()),
            base_font_size: Some(config.base_font_size),
            scale_anchor: Some(config.scale_anchor),
            copy_by_default: Some(config.copy_by_default),
        }
    }

    /// Set the debounce quiet period with validation
    pub fn debounce_ms(mut self, millis: u64) -> Result<Self> {
        ConfigValidator::validate_range(millis, 50, 5000, "debounce ms")?;
        self.debounce_ms = Some(millis);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Set the preselected aspect ratio with validation
    pub fn default_aspect_ratio<S: Into<String>>(mut self, ratio: S) -> Result<Self> {
        let ratio = ratio.into();
        ConfigValidator::validate_aspect_ratio(&ratio)?;
        self.default_aspect_ratio = Some(ratio.trim().to_string());
        Ok(self)
    }

    /// Set the base font size with validation
    pub fn base_font_size(mut self, size: f64) -> Result<Self> {
        ConfigValidator::validate_font_size(size)?;
        self.base_font_size = Some(size);
        Ok(self)
    }

    pub fn scale_anchor(mut self, anchor: ScaleAnchor) -> Self {
        self.scale_anchor = Some(anchor);
        self
    }

    pub fn copy_by_default(mut self, copy: bool) -> Self {
        self.copy_by_default = Some(copy);
        self
    }

    /// Apply a `key = value` pair given as text, as `config set` does
    pub fn set(self, key: &str, value: &str) -> Result<Self> {
        let invalid = |reason: String| {
            DesignKitError::Config(ConfigError::InvalidValue {
                field: key.to_string(),
                value: reason,
            })
        };

        match key {
            "debounce_ms" => {
                let parsed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("'{}' is not a whole number of milliseconds", value)))?;
                self.debounce_ms(parsed)
            }
            "output_format" => {
                let parsed = value.parse::<OutputFormat>().map_err(invalid)?;
                Ok(self.output_format(parsed))
            }
            "default_aspect_ratio" => self.default_aspect_ratio(value),
            "base_font_size" => {
                let parsed = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("'{}' is not a number", value)))?;
                self.base_font_size(parsed)
            }
            "scale_anchor" => {
                let parsed = value.parse::<ScaleAnchor>().map_err(invalid)?;
                Ok(self.scale_anchor(parsed))
            }
            "copy_by_default" => Ok(self.copy_by_default(parse_bool_value(value)?)),
            _ => Err(ConfigError::UnknownKey { key: key.to_string() }.into()),
        }
    }

    /// Load values from environment variables with validation
    pub fn load_from_env(mut self) -> Result<Self> {
        if let Some(millis) = EnvParser::parse_u64(EnvVars::DEBOUNCE_MS, 50, 5000)? {
            self = self.debounce_ms(millis)?;
        }

        if let Some(format) = EnvParser::parse_value::<OutputFormat>(EnvVars::OUTPUT_FORMAT)? {
            self = self.output_format(format);
        }

        if let Some(ratio) = EnvParser::parse_string(EnvVars::DEFAULT_ASPECT_RATIO, Some(ConfigValidator::validate_aspect_ratio))? {
            self = self.default_aspect_ratio(ratio)?;
        }

        if let Some(size) = EnvParser::parse_value::<f64>(EnvVars::BASE_FONT_SIZE)? {
            self = self.base_font_size(size)?;
        }

        if let Some(anchor) = EnvParser::parse_value::<ScaleAnchor>(EnvVars::SCALE_ANCHOR)? {
            self = self.scale_anchor(anchor);
        }

        if let Some(copy) = EnvParser::parse_bool(EnvVars::COPY_BY_DEFAULT)? {
            self = self.copy_by_default(copy);
        }

        Ok(self)
    }

    /// Build the configuration with defaults
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();

        let config = Config {
            debounce_ms: self.debounce_ms.unwrap_or(defaults.debounce_ms),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            default_aspect_ratio: self.default_aspect_ratio.unwrap_or(defaults.default_aspect_ratio),
            base_font_size: self.base_font_size.unwrap_or(defaults.base_font_size),
            scale_anchor: self.scale_anchor.unwrap_or(defaults.scale_anchor),
            copy_by_default: self.copy_by_default.unwrap_or(defaults.copy_by_default),
        };

        // Final validation
        config.validate()?;

        Ok(config)
    }
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate_range(self.debounce_ms, 50, 5000, "debounce ms")?;
        ConfigValidator::validate_aspect_ratio(&self.default_aspect_ratio)?;
        ConfigValidator::validate_font_size(self.base_font_size)?;
        Ok(())
    }
}
