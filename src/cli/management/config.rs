use clap::{Args, Subcommand};
use crate::error::Result;
use crate::config::{Config as AppConfig, ConfigBuilder, EnvParser, CONFIG_KEYS};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// List all available configuration keys
    Keys,
}

pub async fn execute(args: ConfigArgs, config: &AppConfig, config_path: Option<&str>) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            println!("Current configuration:");
            for (key, _) in CONFIG_KEYS {
                println!("  {}: {}", key, config.get(key)?);
            }

            // Show environment overrides if present
            let env_vars = EnvParser::get_all_designkit_vars();
            if !env_vars.is_empty() {
                println!("\nEnvironment overrides:");
                for (key, value) in env_vars {
                    println!("  {} = {}", key, value);
                }
            }
        }

        ConfigCommands::Set { key, value } => {
            let path = target_path(config_path)?;
            let new_config = ConfigBuilder::from_config(config).set(&key, &value)?.build()?;
            new_config.save(&path)?;
            println!("Configuration updated: {} = {}", key, new_config.get(&key)?);
        }

        ConfigCommands::Get { key } => {
            println!("{}", config.get(&key)?);
        }

        ConfigCommands::Path => {
            println!("{}", target_path(config_path)?.display());
        }

        ConfigCommands::Reset => {
            let path = target_path(config_path)?;
            AppConfig::default().save(&path)?;
            println!("Configuration reset to defaults");
            println!("Config file: {}", path.display());
        }

        ConfigCommands::Keys => {
            println!("Available configuration keys:");
            println!();
            for (key, description) in CONFIG_KEYS {
                println!("  {:<22} - {}", key, description);
            }
            println!();
            println!("Usage:");
            println!("  designkit config get <key>           - Get current value");
            println!("  designkit config set <key> <value>   - Set new value with validation");
            println!();
            println!("Environment Variables:");
            println!("  All config keys can be overridden with DESIGNKIT_<KEY> env vars");
            println!("  Example: DESIGNKIT_OUTPUT_FORMAT=json");
        }
    }

    Ok(())
}

fn target_path(config_path: Option<&str>) -> Result<std::path::PathBuf> {
    match config_path {
        Some(path) => Ok(std::path::PathBuf::from(path)),
        None => AppConfig::config_path(),
    }
}
