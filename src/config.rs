//! Configuration loading
//!
//! Reads `~/.config/airbook/config.toml`. A missing file means defaults; a
//! broken file also means defaults, plus a warning the UI shows once.

mod types;

pub use types::{ApiConfig, AutocompleteConfig, Config, ResponseOrdering};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

const CONFIG_DIR: &str = "airbook";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Loaded configuration plus a warning to surface when the file was unusable
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load the config from `path`, falling back to defaults on any problem
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config ignored, {}", e)),
            }
        }
    }
}

/// Strict variant used when the path came from the command line
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::Parse(e.message().to_string()))
}
