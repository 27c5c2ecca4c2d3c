// Module declarations
mod bulk_ops;
mod connection;
mod spot_ops;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
