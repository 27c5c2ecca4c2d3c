//! Configuration management for the spot directory
//!
//! This module handles loading, validation, and management of all configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::import::ValidationMode;
use crate::storage::DatabaseBackendType;
use crate::utils::error::{Result, SpotsError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database connection settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Bulk import settings
    #[serde(default)]
    pub import: ImportConfig,
    /// Reverse geocoding settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// Only parse errors fail here. Call [`Config::validate`] once every
    /// override has been applied.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SpotsError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| SpotsError::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// `DATABASE_URL` wins over the discrete `DB_HOST`/`DB_PORT`/`DB_USER`/
    /// `DB_PASSWORD`/`DB_NAME` parameters, which are only used when `DB_HOST`
    /// is set. Unset variables keep their defaults. Unparsable values fail;
    /// range checks are left to [`Config::validate`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("DATABASE_URL") {
            config.database.url = url;
        } else if let Some(host) = lookup("DB_HOST") {
            let port = match lookup("DB_PORT") {
                Some(port) => parse_var("DB_PORT", &port)?,
                None => 5432,
            };
            let user = lookup("DB_USER").unwrap_or_else(|| "postgres".to_string());
            let password = lookup("DB_PASSWORD").unwrap_or_default();
            let name = lookup("DB_NAME").unwrap_or_else(|| "spots".to_string());
            config.database = DatabaseConfig::from_parts(&host, port, &user, &password, &name);
        }
        if let Some(value) = lookup("DB_MAX_CONNECTIONS") {
            config.database.max_connections = parse_var("DB_MAX_CONNECTIONS", &value)?;
        }

        if let Some(value) = lookup("IMPORT_BATCH_SIZE") {
            config.import.batch_size = parse_var("IMPORT_BATCH_SIZE", &value)?;
        }
        if let Some(value) = lookup("IMPORT_VALIDATION") {
            config.import.validation = match value.trim() {
                "fail_fast" => ValidationMode::FailFast,
                "collect_all" => ValidationMode::CollectAll,
                other => {
                    return Err(SpotsError::config(format!(
                        "IMPORT_VALIDATION must be fail_fast or collect_all, got: {}",
                        other
                    )));
                }
            };
        }
        if let Some(value) = lookup("IMPORT_TIMEOUT_SECS") {
            config.import.timeout_secs = Some(parse_var("IMPORT_TIMEOUT_SECS", &value)?);
        }
        if let Some(value) = lookup("IMPORT_DELIMITER") {
            config.import.delimiter = parse_var("IMPORT_DELIMITER", &value)?;
        }

        if let Some(value) = lookup("GEOCODING_ENABLED") {
            config.geocoding.enabled = parse_var("GEOCODING_ENABLED", &value)?;
        }
        if let Some(value) = lookup("GEOCODING_BASE_URL") {
            config.geocoding.base_url = value;
        }
        if let Some(value) = lookup("GEOCODING_USER_AGENT") {
            config.geocoding.user_agent = value;
        }
        if let Some(value) = lookup("GEOCODING_TIMEOUT_SECS") {
            config.geocoding.timeout_secs = parse_var("GEOCODING_TIMEOUT_SECS", &value)?;
        }

        if let Some(value) = lookup("LOG_LEVEL") {
            config.logging.level = value;
        }
        if let Some(value) = lookup("LOG_JSON") {
            config.logging.json = parse_var("LOG_JSON", &value)?;
        }

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.database
            .validate()
            .map_err(|e| SpotsError::Config(format!("Database config error: {}", e)))?;

        self.import
            .validate()
            .map_err(|e| SpotsError::Config(format!("Import config error: {}", e)))?;

        if let Some(backend) = DatabaseBackendType::from_url(&self.database.url) {
            self.import
                .check_bind_limit(backend)
                .map_err(|e| SpotsError::Config(format!("Import config error: {}", e)))?;
        }

        self.geocoding
            .validate()
            .map_err(|e| SpotsError::Config(format!("Geocoding config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| SpotsError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SpotsError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| SpotsError::Config(format!("Invalid value for {}: {}", key, e)))
}
