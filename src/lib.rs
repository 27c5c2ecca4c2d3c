//! # surf-spots
//!
//! Storage and import backend for a directory of surf spots.
//!
//! - **Bulk import**: reads candidate spots from a CSV file, sanitizes and
//!   validates them, then writes them in fixed-size batches inside a single
//!   transaction. Either every spot lands or none does.
//! - **Spot store**: single-row create/read/update/delete over SeaORM
//!   (SQLite or PostgreSQL).
//! - **Enrichment**: missing locality and country code are filled from a
//!   Nominatim-compatible reverse geocoder on create.
//!
//! ## Importing
//!
//! ```rust,no_run
//! use surf_spots::core::import::{CsvEntrySource, ImportControl, ImportOptions, import_spots};
//! use surf_spots::{Config, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/spots.yaml").await?;
//!     config.validate()?;
//!     let db = Database::new(&config.database).await?;
//!     db.migrate().await?;
//!
//!     let source = CsvEntrySource::new("spots.csv");
//!     let writer = db.bulk_writer(config.import.batch_size);
//!     let options = ImportOptions { validation: config.import.validation };
//!     let count = import_spots(&source, &writer, &options, &ImportControl::new()).await?;
//!     println!("{} spot(s) imported", count);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::import::{ImportControl, ImportError, ImportOptions, import_spots};
pub use core::models::{Coordinates, Spot, SpotEntry, SpotUpdate};
pub use services::{NewSpot, SpotService};
pub use storage::Database;
pub use utils::error::{Result, SpotsError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Git revision the crate was built from
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Version string with the git revision, e.g. `0.1.0 (a1b2c3d)`
pub fn long_version() -> String {
    format!("{} ({})", VERSION, GIT_HASH)
}
