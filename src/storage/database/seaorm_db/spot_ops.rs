use crate::core::import::sanitize_and_validate;
use crate::core::models::{Spot, SpotEntry, SpotUpdate};
use crate::utils::error::{Result, SpotsError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, spot};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find spot by ID
    pub async fn find_spot_by_id(&self, spot_id: i32) -> Result<Option<Spot>> {
        debug!("Finding spot by ID: {}", spot_id);

        let model = entities::Spot::find_by_id(spot_id)
            .one(&*self.db)
            .await
            .map_err(SpotsError::Database)?;

        Ok(model.map(|model| model.to_domain_spot()))
    }

    /// List spots ordered by ID, with pagination
    pub async fn list_spots(&self, limit: u64, offset: u64) -> Result<Vec<Spot>> {
        debug!("Listing spots with limit: {}, offset: {}", limit, offset);

        let models = entities::Spot::find()
            .order_by_asc(spot::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await
            .map_err(SpotsError::Database)?;

        Ok(models.iter().map(spot::Model::to_domain_spot).collect())
    }

    /// Count stored spots
    pub async fn count_spots(&self) -> Result<u64> {
        entities::Spot::find()
            .count(&*self.db)
            .await
            .map_err(SpotsError::Database)
    }

    /// Create a single spot
    pub async fn create_spot(&self, entry: SpotEntry) -> Result<Spot> {
        let entry = sanitize_and_validate(entry)
            .map_err(|e| SpotsError::validation(e.to_string()))?;
        debug!("Creating spot: {}", entry.name);

        let active_model = spot::Model::from_entry(&entry, chrono::Utc::now().into());
        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(SpotsError::Database)?;

        Ok(model.to_domain_spot())
    }

    /// Update a spot; untouched fields keep their values
    pub async fn update_spot(&self, spot_id: i32, update: &SpotUpdate) -> Result<Spot> {
        debug!("Updating spot: {}", spot_id);

        let model = entities::Spot::find_by_id(spot_id)
            .one(&*self.db)
            .await
            .map_err(SpotsError::Database)?
            .ok_or_else(|| SpotsError::not_found(format!("Spot {} not found", spot_id)))?;

        if update.is_empty() {
            return Ok(model.to_domain_spot());
        }

        let entry = sanitize_and_validate(update.apply_to(model.to_domain_spot().to_entry()))
            .map_err(|e| SpotsError::validation(e.to_string()))?;

        let mut active_model: spot::ActiveModel = model.into();
        active_model.name = Set(entry.name);
        active_model.latitude = Set(entry.coordinates.latitude);
        active_model.longitude = Set(entry.coordinates.longitude);
        active_model.locality = Set(entry.locality);
        active_model.country_code = Set(entry.country_code);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model
            .update(&*self.db)
            .await
            .map_err(SpotsError::Database)?;

        Ok(model.to_domain_spot())
    }

    /// Delete a spot
    pub async fn delete_spot(&self, spot_id: i32) -> Result<()> {
        debug!("Deleting spot: {}", spot_id);

        let result = entities::Spot::delete_by_id(spot_id)
            .exec(&*self.db)
            .await
            .map_err(SpotsError::Database)?;

        if result.rows_affected == 0 {
            return Err(SpotsError::not_found(format!("Spot {} not found", spot_id)));
        }
        Ok(())
    }
}
