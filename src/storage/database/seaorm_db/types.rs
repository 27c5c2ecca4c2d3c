use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// SeaORM-based database implementation
///
/// The connection is shared with the bulk writers handed out by
/// [`SeaOrmDatabase::bulk_writer`].
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    pub(super) db: Arc<DatabaseConnection>,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    /// Infer the backend from a connection URL
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(Self::SQLite)
        } else if url.starts_with("postgresql://") || url.starts_with("postgres://") {
            Some(Self::PostgreSQL)
        } else {
            None
        }
    }

    /// Maximum number of bound parameters in one statement
    pub fn max_bind_parameters(self) -> usize {
        match self {
            Self::PostgreSQL => 65_535,
            Self::SQLite => 32_766,
        }
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    /// Total number of spots
    pub total_spots: u64,
    /// Backend in use
    pub backend: DatabaseBackendType,
}
