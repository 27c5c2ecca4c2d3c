//! Transactional bulk writer
//!
//! One run owns one transaction. Entries are inserted batch by batch, one
//! multi-row INSERT per batch, and the transaction commits only after the
//! last batch. Any failure rolls back every batch of the run.

use super::batch::{Batch, BatchCoordinator};
use super::error::WriteError;
use crate::core::models::SpotEntry;
use crate::storage::database::entities::{self, spot};
use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait, TransactionTrait};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Bound parameters per inserted spot row
pub const SPOT_INSERT_COLUMNS: usize = spot::INSERT_COLUMNS;

/// Called after each inserted batch with the running row total
pub type BatchCallback = Arc<dyn Fn(Batch, u64) + Send + Sync>;

/// Cancellation, deadline and progress reporting for one run
#[derive(Clone, Default)]
pub struct ImportControl {
    cancel: CancellationToken,
    deadline: Option<Instant>,
    on_batch: Option<BatchCallback>,
}

impl fmt::Debug for ImportControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportControl")
            .field("cancel", &self.cancel)
            .field("deadline", &self.deadline)
            .field("on_batch", &self.on_batch.is_some())
            .finish()
    }
}

impl ImportControl {
    /// No deadline, fresh cancellation token
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing cancellation token
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Abort the run once `timeout` has elapsed from now
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Report every inserted batch to `callback`
    ///
    /// Rows reported here are still uncommitted. The callback runs on the
    /// import task between batches, so it must not block.
    pub fn on_batch<F>(mut self, callback: F) -> Self
    where
        F: Fn(Batch, u64) + Send + Sync + 'static,
    {
        self.on_batch = Some(Arc::new(callback));
        self
    }

    /// Token that aborts the run when cancelled
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancel the run
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Fail if the run was cancelled or its deadline has passed
    pub fn check(&self) -> Result<(), WriteError> {
        if self.cancel.is_cancelled() {
            return Err(WriteError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(WriteError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Race `fut` against cancellation and the deadline
    pub async fn guard<F: Future>(&self, fut: F) -> Result<F::Output, WriteError> {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(WriteError::Cancelled),
            _ = deadline => Err(WriteError::DeadlineExceeded),
            output = fut => Ok(output),
        }
    }
}

/// Persists a validated entry sequence atomically
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpotWriter: Send + Sync {
    /// Persist every entry or none; returns the number of rows written
    async fn write_spots(
        &self,
        entries: &[SpotEntry],
        control: &ImportControl,
    ) -> Result<u64, WriteError>;
}

/// [`SpotWriter`] over a SeaORM connection
#[derive(Debug, Clone)]
pub struct BulkSpotWriter {
    db: Arc<DatabaseConnection>,
    batch_size: usize,
}

impl BulkSpotWriter {
    /// Create a writer inserting at most `batch_size` rows per statement
    pub fn new(db: Arc<DatabaseConnection>, batch_size: usize) -> Self {
        Self { db, batch_size }
    }

    /// Configured batch size
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    async fn insert_batches(
        &self,
        txn: &DatabaseTransaction,
        entries: &[SpotEntry],
        control: &ImportControl,
    ) -> Result<u64, WriteError> {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let mut total = 0u64;

        for batch in BatchCoordinator::new(entries.len(), self.batch_size) {
            control.check()?;

            let models = entries[batch.range()]
                .iter()
                .map(|entry| spot::Model::from_entry(entry, now));
            let insert = entities::Spot::insert_many(models).exec_without_returning(txn);

            let affected = control
                .guard(insert)
                .await?
                .map_err(|source| WriteError::Exec { batch, source })?;
            check_affected(batch, affected)?;

            debug!("Inserted batch {} ({} rows)", batch, affected);
            total += affected;
            if let Some(on_batch) = &control.on_batch {
                on_batch(batch, total);
            }
        }

        Ok(total)
    }
}

/// A multi-row INSERT must report exactly one affected row per entry
fn check_affected(batch: Batch, affected: u64) -> Result<(), WriteError> {
    let expected = batch.len() as u64;
    if affected != expected {
        return Err(WriteError::RowCountMismatch {
            batch,
            expected,
            affected,
        });
    }
    Ok(())
}

#[async_trait]
impl SpotWriter for BulkSpotWriter {
    async fn write_spots(
        &self,
        entries: &[SpotEntry],
        control: &ImportControl,
    ) -> Result<u64, WriteError> {
        if entries.is_empty() {
            return Err(WriteError::NothingToImport);
        }
        if self.batch_size == 0 {
            return Err(WriteError::InvalidBatchSize);
        }
        control.check()?;

        info!(
            "Writing {} spots in batches of {}",
            entries.len(),
            self.batch_size
        );

        let txn = self.db.begin().await.map_err(WriteError::Begin)?;

        match self.insert_batches(&txn, entries, control).await {
            Ok(count) => {
                txn.commit().await.map_err(WriteError::Commit)?;
                info!("Committed {} spots", count);
                Ok(count)
            }
            Err(e) => {
                warn!("Rolling back import: {}", e);
                if let Err(rollback_err) = txn.rollback().await {
                    error!("Rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
