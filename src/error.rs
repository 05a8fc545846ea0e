//! Error handling for designkit
//!
//! A single top-level error wraps the per-area errors so commands can use `?`
//! freely. Invalid foreground colors never show up here: the contrast engine
//! drops them locally.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::aspect::AspectError;

#[derive(Error, Debug)]
pub enum DesignKitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Aspect ratio error: {0}")]
    Aspect(#[from] AspectError),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Could not determine the configuration directory")]
    NoProjectDirs,
}

pub type Result<T> = std::result::Result<T, DesignKitError>;

impl From<toml::de::Error> for DesignKitError {
    fn from(err: toml::de::Error) -> Self {
        DesignKitError::Config(ConfigError::InvalidFormat(err))
    }
}

impl From<toml::ser::Error> for DesignKitError {
    fn from(err: toml::ser::Error) -> Self {
        DesignKitError::Config(ConfigError::Serialize(err))
    }
}

impl From<serde_json::Error> for DesignKitError {
    fn from(err: serde_json::Error) -> Self {
        DesignKitError::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err: DesignKitError = ConfigError::UnknownKey { key: "colour".to_string() }.into();
        assert_eq!(err.to_string(), "Configuration error: Unknown configuration key: colour");

        let err: DesignKitError = AspectError::CustomRatio.into();
        assert!(err.to_string().starts_with("Aspect ratio error"));
    }

    #[test]
    fn test_toml_errors_map_to_config() {
        let err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        assert!(matches!(DesignKitError::from(err), DesignKitError::Config(ConfigError::InvalidFormat(_))));
    }
}
