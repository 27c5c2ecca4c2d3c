use crate::core::import::{BulkSpotWriter, ImportControl, SpotWriter, WriteError};
use crate::core::models::SpotEntry;
use std::sync::Arc;

use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Bulk writer bound to this connection
    pub fn bulk_writer(&self, batch_size: usize) -> BulkSpotWriter {
        BulkSpotWriter::new(Arc::clone(&self.db), batch_size)
    }

    /// Insert validated entries atomically, `batch_size` rows per statement
    pub async fn create_spots(
        &self,
        entries: &[SpotEntry],
        batch_size: usize,
        control: &ImportControl,
    ) -> std::result::Result<u64, WriteError> {
        self.bulk_writer(batch_size)
            .write_spots(entries, control)
            .await
    }
}
