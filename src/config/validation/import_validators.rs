//! Import configuration validators

use super::Validate;
use crate::config::models::*;
use crate::core::import::SPOT_INSERT_COLUMNS;
use crate::storage::DatabaseBackendType;

impl Validate for ImportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("Import batch size must be greater than 0".to_string());
        }

        if self.timeout_secs == Some(0) {
            return Err("Import timeout must be greater than 0 when set".to_string());
        }

        if self.delimiter_byte().is_none() {
            return Err(format!(
                "Import delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ));
        }

        Ok(())
    }
}

impl ImportConfig {
    /// Ensure one batch INSERT stays within the backend's bind-parameter limit
    pub fn check_bind_limit(&self, backend: DatabaseBackendType) -> Result<(), String> {
        let limit = backend.max_bind_parameters();
        let max_batch = limit / SPOT_INSERT_COLUMNS;
        if self.batch_size > max_batch {
            return Err(format!(
                "Import batch size {} needs {} bind parameters per statement; {:?} allows {} (max batch size {})",
                self.batch_size,
                self.batch_size.saturating_mul(SPOT_INSERT_COLUMNS),
                backend,
                limit,
                max_batch
            ));
        }
        Ok(())
    }
}
