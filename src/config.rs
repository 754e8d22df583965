//! Configuration management for the delivery time predictor

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub artifacts: ArtifactsConfig,
    pub logging: LoggingConfig,
}

/// Trained artifact locations
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Path to the serialized feature scaler
    #[serde(default = "default_scaler_path")]
    pub scaler_path: String,
    /// Path to the serialized regression model
    #[serde(default = "default_model_path")]
    pub model_path: String,
}

fn default_scaler_path() -> String {
    "artifacts/scaler.json".to_string()
}

fn default_model_path() -> String {
    "artifacts/linear_model.json".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from the default file, falling back to
    /// defaults when no config file is present.
    pub fn load() -> Result<Self> {
        let default_path = "config/config.toml";
        if Path::new(default_path).exists() {
            Self::load_from_path(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactsConfig {
                scaler_path: default_scaler_path(),
                model_path: default_model_path(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
