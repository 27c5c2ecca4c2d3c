//! Configuration data models
//!
//! This module defines all configuration structures used by the spot directory.

#![allow(missing_docs)]

pub mod geocoding;
pub mod import;
pub mod logging;
pub mod storage;

// Re-export all configuration types
pub use geocoding::*;
pub use import::*;
pub use logging::*;
pub use storage::*;

/// Default database URL
pub fn default_database_url() -> String {
    "sqlite://data/spots.db?mode=rwc".to_string()
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    5
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default number of rows per INSERT statement
pub fn default_batch_size() -> usize {
    500
}

/// Default CSV delimiter
pub fn default_delimiter() -> char {
    ','
}

/// Default reverse geocoding endpoint
pub fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

/// Default HTTP user agent for outbound requests
pub fn default_user_agent() -> String {
    format!("surf-spots/{}", env!("CARGO_PKG_VERSION"))
}

/// Default HTTP timeout in seconds
pub fn default_timeout() -> u64 {
    10
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
