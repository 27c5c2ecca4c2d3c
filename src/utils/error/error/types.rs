//! Error type definitions

use crate::core::import::ImportError;
use thiserror::Error;

/// Result type alias for the spot directory
pub type Result<T> = std::result::Result<T, SpotsError>;

/// Main error type for the spot directory
#[derive(Error, Debug)]
pub enum SpotsError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reverse geocoding errors
    #[error("Geocoding error: {0}")]
    Geocoding(String),

    /// Bulk import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
