//! Reverse geocoding
//!
//! Resolves a coordinate pair to the locality and country it lies in, using a
//! Nominatim-compatible HTTP service.

use crate::config::GeocodingConfig;
use crate::utils::error::{Result, SpotsError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Locality and country resolved for a position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Place {
    /// City, town, village or the closest administrative area
    pub locality: Option<String>,
    /// ISO 3166-1 alpha-2 country code, as reported by the service
    pub country_code: Option<String>,
}

/// Resolves coordinates to a place
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Look up the place at `(latitude, longitude)`; `None` when the service knows nothing there
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<Place>>;
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    hamlet: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
    country_code: Option<String>,
}

impl Address {
    fn into_place(self) -> Place {
        let locality = [
            self.city,
            self.town,
            self.village,
            self.hamlet,
            self.municipality,
            self.county,
        ]
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty());

        Place {
            locality,
            country_code: self.country_code.filter(|code| !code.trim().is_empty()),
        }
    }
}

/// HTTP client for the Nominatim `/reverse` endpoint
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    client: reqwest::Client,
}

impl NominatimGeocoder {
    /// Create a new geocoder
    ///
    /// # Errors
    /// Returns error if HTTP client cannot be created
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SpotsError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/reverse", self.base_url)
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<Place>> {
        debug!("Reverse geocoding ({}, {})", latitude, longitude);

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpotsError::geocoding(format!(
                "reverse lookup failed with status: {}",
                response.status()
            )));
        }

        let body: ReverseResponse = response.json().await?;
        if let Some(error) = body.error {
            warn!(
                "Reverse geocoding returned no place for ({}, {}): {}",
                latitude, longitude, error
            );
            return Ok(None);
        }

        Ok(body.address.map(Address::into_place))
    }
}
