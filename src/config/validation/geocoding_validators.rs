//! Geocoding configuration validators

use super::Validate;
use crate::config::models::*;
use url::Url;

impl Validate for GeocodingConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Geocoding base URL is invalid: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Geocoding base URL must use http:// or https://, got: {}",
                url.scheme()
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err("Geocoding user agent cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Geocoding timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
