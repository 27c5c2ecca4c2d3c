//! Spot domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position of a spot, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, valid range [-90, 90]
    pub latitude: f64,
    /// Longitude, valid range [-180, 180]
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A spot that has not been persisted yet.
///
/// Import sources produce these; they are sanitized and validated before
/// they reach the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotEntry {
    /// Spot name
    pub name: String,
    /// Position
    pub coordinates: Coordinates,
    /// Town or region the spot belongs to
    pub locality: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
}

impl SpotEntry {
    /// Create a new entry
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        locality: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates: Coordinates::new(latitude, longitude),
            locality: locality.into(),
            country_code: country_code.into(),
        }
    }
}

/// A persisted spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    /// Store-assigned identifier
    pub id: i32,
    /// Spot name
    pub name: String,
    /// Position
    pub coordinates: Coordinates,
    /// Town or region the spot belongs to
    pub locality: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Spot {
    /// The writable part of this spot
    pub fn to_entry(&self) -> SpotEntry {
        SpotEntry {
            name: self.name.clone(),
            coordinates: self.coordinates,
            locality: self.locality.clone(),
            country_code: self.country_code.clone(),
        }
    }
}

/// Partial update of a spot; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotUpdate {
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub locality: Option<String>,
    pub country_code: Option<String>,
}

impl SpotUpdate {
    /// Apply this update on top of an existing entry
    pub fn apply_to(&self, mut entry: SpotEntry) -> SpotEntry {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(coordinates) = self.coordinates {
            entry.coordinates = coordinates;
        }
        if let Some(locality) = &self.locality {
            entry.locality = locality.clone();
        }
        if let Some(country_code) = &self.country_code {
            entry.country_code = country_code.clone();
        }
        entry
    }

    /// Whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.coordinates.is_none()
            && self.locality.is_none()
            && self.country_code.is_none()
    }
}
