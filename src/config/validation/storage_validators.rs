//! Database configuration validators

use super::Validate;
use crate::config::models::*;
use crate::storage::DatabaseBackendType;

const MAX_POOL_SIZE: u32 = 1000;

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if DatabaseBackendType::from_url(&self.url).is_none() {
            return Err(format!(
                "Unsupported database URL {}: expected sqlite:, postgres:// or postgresql://",
                self.redacted_url()
            ));
        }

        if !(1..=MAX_POOL_SIZE).contains(&self.max_connections) {
            return Err(format!(
                "Database max connections must be between 1 and {}, got {}",
                MAX_POOL_SIZE, self.max_connections
            ));
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
