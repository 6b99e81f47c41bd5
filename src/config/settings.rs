//! Application configuration loading from config.toml
//!
//! Every section is optional. A missing file section falls back to the
//! defaults: permissive stop dates, three save attempts 200 ms apart, and an
//! empty catalog seed.

use super::catalog::{ActivityConfig, CityConfig};
use crate::errors::{Error, Result};
use crate::itinerary::DatePolicy;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Itinerary editing rules
    #[serde(default)]
    pub itinerary: ItinerarySettings,
    /// Save behaviour against the database
    #[serde(default)]
    pub persistence: PersistenceSettings,
    /// Cities to seed into the catalog
    #[serde(default)]
    pub cities: Vec<CityConfig>,
    /// Activities to seed into the catalog
    #[serde(default)]
    pub activities: Vec<ActivityConfig>,
}

/// `[itinerary]` section
#[derive(Debug, Default, Deserialize, Clone, Copy)]
pub struct ItinerarySettings {
    /// How strictly stop dates are checked
    #[serde(default)]
    pub date_policy: DatePolicy,
}

/// `[persistence]` section
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct PersistenceSettings {
    /// Total attempts for a trip save before giving up
    #[serde(default = "default_save_attempts")]
    pub save_attempts: u32,
    /// Delay before the first retry; doubled for each later retry
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl PersistenceSettings {
    #[must_use]
    pub const fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            save_attempts: default_save_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

const fn default_save_attempts() -> u32 {
    3
}

const fn default_retry_backoff_ms() -> u64 {
    200
}

/// Parses configuration from a TOML string
///
/// # Errors
/// Returns an error if the TOML syntax is invalid, a field has the wrong
/// type, or `save_attempts` is zero.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    if config.persistence.save_attempts == 0 {
        return Err(Error::Config {
            message: "persistence.save_attempts must be at least 1".to_string(),
        });
    }
    Ok(config)
}

/// Loads configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;
    parse_config(&contents)
}

/// Loads configuration from `CONFIG_PATH`, or ./config.toml when unset
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_config(path)
}
