//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub emission: EmissionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            emission: EmissionConfig::default(),
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("emission-tracker");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "id"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Emission calculation constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionConfig {
    /// Grid carbon intensity in kg CO2 per kWh
    #[serde(default = "default_carbon_factor")]
    pub carbon_factor: f64,
    /// Days per month used for the monthly projection
    #[serde(default = "default_days_per_month")]
    pub days_per_month: f64,
    /// Months per year used for the yearly projection
    #[serde(default = "default_months_per_year")]
    pub months_per_year: f64,
}

fn default_carbon_factor() -> f64 { 0.87 }
fn default_days_per_month() -> f64 { 30.0 }
fn default_months_per_year() -> f64 { 12.0 }

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            carbon_factor: default_carbon_factor(),
            days_per_month: default_days_per_month(),
            months_per_year: default_months_per_year(),
        }
    }
}
