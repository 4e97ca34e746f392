//! Host configuration
//!
//! The configuration is owned by the host and handed to every scraper at
//! construction. It is read from `config.toml` in the platform's standard
//! config directory; a missing file means defaults.

use crate::scraper::ScraperOptions;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Name of the configuration file inside the config directory
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory location
    #[error("Failed to determine config directory location")]
    ConfigDirectoryNotFound,

    /// Failed to read the configuration file
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has wrongly typed values
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

/// Host configuration shared with all scrapers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timeout for HTTP requests, in seconds
    pub http_timeout: u64,
    /// User agent sent with HTTP requests
    pub user_agent: String,
    /// Per-scraper option tables, keyed by scraper name
    pub scrapers: HashMap<String, ScraperOptions>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_timeout: 15,
            user_agent: format!("mov-cli-test/{}", env!("CARGO_PKG_VERSION")),
            scrapers: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads the configuration from the platform config directory
    ///
    /// Returns the default configuration if no config file exists yet.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::load()?;
    /// println!("HTTP timeout: {:?}", config.timeout());
    /// ```
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    /// Loads the configuration from an explicit path, defaulting if it is absent
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parses a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The HTTP timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Returns the options configured for the named scraper (empty if none)
    pub fn scraper_options(&self, name: &str) -> ScraperOptions {
        self.scrapers.get(name).cloned().unwrap_or_default()
    }
}

/// Path of the config file
///
/// - Linux: ~/.config/mov-cli-test/config.toml
/// - macOS: ~/Library/Application Support/mov-cli.mov-cli-test/config.toml
/// - Windows: %APPDATA%\mov-cli\mov-cli-test\config\config.toml
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "mov-cli", "mov-cli-test")
        .ok_or(ConfigError::ConfigDirectoryNotFound)?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
