//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! temporal-config.toml file. It provides a centralized way to configure
//! the observer's location and chart options without rebuilding.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors from explicit configuration I/O.
///
/// `Config::load` never surfaces these — it falls back to defaults — but
/// `save` and `try_load_from_path` report them for callers that care.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("config IO: {0}")]
    Io(#[from] io::Error),

    /// The file exists but is not valid TOML for this schema
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serializing the in-memory config failed
    #[error("config serialize: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration loaded from temporal-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Observer location
    pub location: LocationConfig,
    /// Chart rendering options
    pub chart: ChartConfig,
}

/// Observer location configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Latitude in signed decimal degrees (north positive)
    pub latitude: f64,
    /// Longitude in signed decimal degrees (east positive)
    pub longitude: f64,
    /// Human-readable place name for display
    pub name: String,
}

/// Year-chart rendering configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Chart height in terminal rows
    pub rows: usize,
    /// Sampling stride in days (1 column per `day_step` days)
    pub day_step: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            location: LocationConfig {
                // The city the convention is named after
                latitude: 41.8933,
                longitude: 12.4829,
                name: "Rome".to_string(),
            },
            chart: ChartConfig {
                rows: 20,
                day_step: 3,
            },
        }
    }
}

impl Config {
    /// Load configuration from temporal-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("temporal-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load_from_path(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => {
                eprintln!("Info: No config file found, using default configuration (Rome)");
                Self::default()
            }
            Err(e) => {
                eprintln!("Warning: Invalid config file: {}", e);
                eprintln!("Using default configuration (Rome)");
                Self::default()
            }
        }
    }

    /// Load configuration from specified path, surfacing failures
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save current configuration to the given path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!((config.location.latitude - 41.8933).abs() < 1e-9);
        assert!((config.location.longitude - 12.4829).abs() < 1e-9);
        assert_eq!(config.location.name, "Rome");
        assert_eq!(config.chart.rows, 20);
        assert_eq!(config.chart.day_step, 3);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.location.latitude, parsed.location.latitude);
        assert_eq!(config.location.longitude, parsed.location.longitude);
        assert_eq!(config.location.name, parsed.location.name);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config.location.name, "Rome");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temporal-config.toml");

        let mut config = Config::default();
        config.location.latitude = 59.3293;
        config.location.longitude = 18.0686;
        config.location.name = "Stockholm".to_string();
        config.save(&path).unwrap();

        let reloaded = Config::try_load_from_path(&path).unwrap();
        assert_eq!(reloaded.location.name, "Stockholm");
        assert!((reloaded.location.latitude - 59.3293).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temporal-config.toml");
        fs::write(&path, "latitude = \"not a float\"").unwrap();

        let config = Config::load_from_path(&path);
        assert_eq!(config.location.name, "Rome");
    }
}
