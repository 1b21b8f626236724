use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use anyhow::{Result, Context};
use lazy_static::lazy_static;
use log::debug;
use std::sync::RwLock;

use crate::credential::{parse_pattern, Field, ValidatorError};

/// Pattern overrides, each a `/body/flags` literal
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PatternConfig {
    /// Username pattern, default pattern when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email pattern, default pattern when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Password pattern, default pattern when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl PatternConfig {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => self.username.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }

    /// Check that every configured literal is a valid regexp
    pub fn validate(&self) -> Result<(), ValidatorError> {
        for field in Field::ALL {
            if let Some(literal) = self.get(field) {
                parse_pattern(literal)?;
            }
        }
        Ok(())
    }

    /// Layer `overrides` on top of this config, field by field
    pub fn merged_with(&self, overrides: &PatternConfig) -> PatternConfig {
        PatternConfig {
            username: overrides.username.clone().or_else(|| self.username.clone()),
            email: overrides.email.clone().or_else(|| self.email.clone()),
            password: overrides.password.clone().or_else(|| self.password.clone()),
        }
    }
}

/// Global application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Application version
    pub version: String,
    /// Validation pattern overrides
    #[serde(default)]
    pub patterns: PatternConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Credential Validator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            patterns: PatternConfig::default(),
        }
    }
}

// Global configuration instance
lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

/// Load configuration from file
pub fn load_config(path: &str) -> Result<()> {
    // Missing file: write out the defaults and use them
    if !Path::new(path).exists() {
        debug!("Config file {} not found, writing defaults", path);
        let default_config = Config::default();
        save_config(path, &default_config)?;
        return update_config(default_config);
    }

    let mut file = File::open(path).context(format!("Failed to open config file: {}", path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).context("Failed to read config file")?;

    let config: Config = match path.ends_with(".toml") {
        true => toml::from_str(&contents).context("Failed to parse TOML config")?,
        false => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    config.patterns.validate()
        .context(format!("Invalid pattern in config file: {}", path))?;

    update_config(config)
}

/// Save configuration to file
pub fn save_config(path: &str, config: &Config) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
    }

    let serialized = match path.ends_with(".toml") {
        true => toml::to_string_pretty(config).context("Failed to serialize config to TOML")?,
        false => serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")?,
    };

    std::fs::write(path, serialized).context(format!("Failed to write config to file: {}", path))?;

    Ok(())
}

/// Get a copy of the current config
pub fn get_config() -> Config {
    CONFIG.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
}

/// Replace the current config
pub fn update_config(config: Config) -> Result<()> {
    config.patterns.validate().context("Refusing config with invalid pattern")?;
    *CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
    Ok(())
}
