//! Configuration loading
//!
//! Precedence, lowest to highest: built-in defaults, the TOML config file,
//! `DESIGNKIT_*` environment variables (a `.env` file is honored).

pub mod builder;
pub mod env;
pub mod validation;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::typography::ScaleAnchor;
use crate::error::{ConfigError, Result};

pub use builder::{ConfigBuilder, CONFIG_KEYS};
pub use env::{EnvParser, EnvVars};

pub const DEFAULT_DEBOUNCE_MS: u64 = 400;
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
pub const DEFAULT_BASE_FONT_SIZE: f64 = 16.0;

/// Held by tests that read or write the real `DESIGNKIT_*` variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (use text or json)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period before the contrast finder recomputes (milliseconds)
    pub debounce_ms: u64,

    /// Default output format for one-shot commands
    pub output_format: OutputFormat,

    /// Ratio preselected by the aspect calculator (`W:H` or `custom`)
    pub default_aspect_ratio: String,

    /// Base font size for the type scale (px)
    pub base_font_size: f64,

    /// Where the base size sits in the type scale
    pub scale_anchor: ScaleAnchor,

    /// Copy the primary result to the clipboard without `--copy`
    pub copy_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            output_format: OutputFormat::Text,
            default_aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            scale_anchor: ScaleAnchor::Smallest,
            copy_by_default: false,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Try to load .env file if it exists
        dotenvy::dotenv().ok();

        let config_file = match config_path {
            Some(path) => PathBuf::from(path),
            None => Self::default_config_path()?,
        };

        let mut config = Self::default();
        if config_file.exists() {
            debug!("Loading config from {}", config_file.display());
            let content = fs::read_to_string(&config_file)?;
            config = toml::from_str(&content)?;
        } else if config_path.is_some() {
            return Err(ConfigError::FileNotFound { path: config_file }.into());
        }

        // Environment variables win over the file, and everything is revalidated
        let config = ConfigBuilder::from_config(&config).load_from_env()?.build()?;

        // Write defaults on first run so users have something to edit
        if !config_file.exists() {
            if let Err(e) = config.save(&config_file) {
                warn!("Could not write default config to {}: {}", config_file.display(), e);
            }
        }

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "designkit", "designkit").ok_or(ConfigError::NoProjectDirs)?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Self::default_config_path()
    }

    /// Current value of a configuration key, as shown by `config get`.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "debounce_ms" => self.debounce_ms.to_string(),
            "output_format" => self.output_format.to_string(),
            "default_aspect_ratio" => self.default_aspect_ratio.clone(),
            "base_font_size" => self.base_font_size.to_string(),
            "scale_anchor" => self.scale_anchor.to_string(),
            "copy_by_default" => self.copy_by_default.to_string(),
            _ => return Err(ConfigError::UnknownKey { key: key.to_string() }.into()),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("debounce_ms = 250\nscale_anchor = \"medium\"").unwrap();
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.scale_anchor, ScaleAnchor::Medium);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.default_aspect_ratio, "16:9");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            output_format: OutputFormat::Json,
            copy_by_default: true,
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("output_format = \"json\""));
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = Config::default();
        assert_eq!(config.get("debounce_ms").unwrap(), "400");
        assert_eq!(config.get("scale_anchor").unwrap(), "smallest");
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let result = Config::load(Some("/definitely/not/here/designkit.toml"));
        assert!(result.is_err());
    }
}
