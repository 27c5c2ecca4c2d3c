use crate::core::models::{Coordinates, Spot, SpotEntry};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Spot database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "spots")]
pub struct Model {
    /// Spot ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Spot name
    pub name: String,

    /// Latitude in decimal degrees
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,

    /// Town or region
    pub locality: String,

    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Number of bound parameters one spot row contributes to an INSERT
pub const INSERT_COLUMNS: usize = 7;

impl Model {
    /// Convert SeaORM model to domain spot
    pub fn to_domain_spot(&self) -> Spot {
        Spot {
            id: self.id,
            name: self.name.clone(),
            coordinates: Coordinates::new(self.latitude, self.longitude),
            locality: self.locality.clone(),
            country_code: self.country_code.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Active model for inserting a new spot; the id is left to the store
    pub fn from_entry(entry: &SpotEntry, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(entry.name.clone()),
            latitude: Set(entry.coordinates.latitude),
            longitude: Set(entry.coordinates.longitude),
            locality: Set(entry.locality.clone()),
            country_code: Set(entry.country_code.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
