//! Spot service
//!
//! Single-spot operations on top of the store. Creation fills a missing
//! locality or country code from the reverse geocoder before validation.

use crate::config::GeocodingConfig;
use crate::core::models::{Spot, SpotEntry, SpotUpdate};
use crate::storage::Database;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::geocoding::{NominatimGeocoder, ReverseGeocoder};

/// User input for a new spot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSpot {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl NewSpot {
    fn needs_place(&self) -> bool {
        is_blank(&self.locality) || is_blank(&self.country_code)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Spot service
#[derive(Clone)]
pub struct SpotService {
    db: Arc<Database>,
    geocoder: Option<Arc<dyn ReverseGeocoder>>,
}

impl SpotService {
    /// Create a service without enrichment
    pub fn new(db: Arc<Database>) -> Self {
        Self { db, geocoder: None }
    }

    /// Create a service from the `geocoding` configuration section
    ///
    /// Attaches a [`NominatimGeocoder`] only when `config.enabled` is true.
    pub fn from_config(db: Arc<Database>, config: &GeocodingConfig) -> Result<Self> {
        let service = Self::new(db);
        if !config.enabled {
            debug!("Reverse geocoding disabled");
            return Ok(service);
        }

        let geocoder = NominatimGeocoder::new(config)?;
        debug!("Reverse geocoding through {}", config.base_url);
        Ok(service.with_geocoder(Arc::new(geocoder)))
    }

    /// Whether created spots are enriched through a geocoder
    pub fn has_geocoder(&self) -> bool {
        self.geocoder.is_some()
    }

    /// Enrich created spots through `geocoder`
    pub fn with_geocoder(mut self, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Create a spot, filling locality and country from the geocoder when missing
    ///
    /// A failed lookup is logged and the spot is validated as given.
    pub async fn create_spot(&self, new_spot: NewSpot) -> Result<Spot> {
        let mut new_spot = new_spot;

        if new_spot.needs_place() {
            if let Some(geocoder) = &self.geocoder {
                match geocoder
                    .reverse(new_spot.latitude, new_spot.longitude)
                    .await
                {
                    Ok(Some(place)) => {
                        debug!("Geocoded {:?} for spot {}", place, new_spot.name);
                        if is_blank(&new_spot.locality) {
                            new_spot.locality = place.locality;
                        }
                        if is_blank(&new_spot.country_code) {
                            new_spot.country_code = place.country_code;
                        }
                    }
                    Ok(None) => debug!("No place found for spot {}", new_spot.name),
                    Err(e) => warn!("Reverse geocoding failed for spot {}: {}", new_spot.name, e),
                }
            }
        }

        let entry = SpotEntry::new(
            new_spot.name,
            new_spot.latitude,
            new_spot.longitude,
            new_spot.locality.unwrap_or_default(),
            new_spot.country_code.unwrap_or_default(),
        );

        let spot = self.db.create_spot(entry).await?;
        info!("Created spot {} ({})", spot.id, spot.name);
        Ok(spot)
    }

    /// Get a spot by ID
    pub async fn get_spot(&self, spot_id: i32) -> Result<Option<Spot>> {
        self.db.find_spot_by_id(spot_id).await
    }

    /// List spots with pagination
    pub async fn list_spots(&self, limit: u64, offset: u64) -> Result<Vec<Spot>> {
        self.db.list_spots(limit, offset).await
    }

    /// Update a spot
    pub async fn update_spot(&self, spot_id: i32, update: &SpotUpdate) -> Result<Spot> {
        self.db.update_spot(spot_id, update).await
    }

    /// Delete a spot
    pub async fn delete_spot(&self, spot_id: i32) -> Result<()> {
        self.db.delete_spot(spot_id).await?;
        info!("Deleted spot {}", spot_id);
        Ok(())
    }
}
