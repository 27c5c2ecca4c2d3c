//! Reverse geocoding configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Reverse geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Enable locality/country enrichment on create
    #[serde(default = "default_geocoding_enabled")]
    pub enabled: bool,
    /// Base URL of a Nominatim-compatible service
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_geocoding_enabled() -> bool {
    true
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: default_geocoding_enabled(),
            base_url: default_geocoding_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}
