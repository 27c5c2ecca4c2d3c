//! Bulk spot import pipeline
//!
//! ```text
//! EntrySource ──► sanitize/validate ──► BulkSpotWriter ──► count
//!                                        (one transaction, batched INSERTs)
//! ```

pub mod batch;
pub mod error;
pub mod orchestrator;
pub mod source;
pub mod validation;
pub mod writer;

pub use batch::{Batch, BatchCoordinator};
pub use error::{EntryFailure, ImportError, SourceError, ValidationError, WriteError};
pub use orchestrator::{ImportOptions, import_spots};
pub use source::{CsvEntrySource, EntrySource, StaticEntrySource};
pub use validation::{ValidationMode, sanitize, sanitize_and_validate, validate, validate_entries};
pub use writer::{BatchCallback, BulkSpotWriter, ImportControl, SPOT_INSERT_COLUMNS, SpotWriter};
