use std::path::Path;

use figment::providers::{Format, Json, Serialized, Toml};
use figment::Figment;
use tracing::info;

use crate::domain::enterprise::EnhancerConfig;
use crate::domain::error::{AppError, Result};

/// Loads [`EnhancerConfig`] from built-in defaults and an optional file
pub struct ConfigService;

impl ConfigService {
    /// Defaults merged with the given TOML or JSON file, then validated
    pub fn load(path: Option<&Path>) -> Result<EnhancerConfig> {
        let figment = Self::figment(path)?;
        let config: EnhancerConfig = figment.extract()?;

        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid configuration: {}", e)))?;

        if let Some(path) = path {
            info!(
                path = %path.display(),
                groups = config.benchmarks.len(),
                rules = config.rules.len(),
                "Loaded enhancer configuration"
            );
        }
        Ok(config)
    }

    fn figment(path: Option<&Path>) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(EnhancerConfig::default()));

        let Some(path) = path else {
            return Ok(figment);
        };

        if !path.is_file() {
            return Err(AppError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Ok(figment.merge(Toml::file(path))),
            Some("json") => Ok(figment.merge(Json::file(path))),
            _ => Err(AppError::UnsupportedFormat(format!(
                "config file {} must be .toml or .json",
                path.display()
            ))),
        }
    }
}
