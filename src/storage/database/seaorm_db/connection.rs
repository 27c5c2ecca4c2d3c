use crate::config::DatabaseConfig;
use crate::utils::error::{Result, SpotsError};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::from_url(&config.url).ok_or_else(|| {
            SpotsError::config(format!(
                "Unsupported database URL scheme: {}",
                config.redacted_url()
            ))
        })?;

        if backend_type == DatabaseBackendType::SQLite {
            ensure_sqlite_dir(&config.url).await?;
        }

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(opt).await.map_err(|e| {
            warn!(
                "Failed to connect to database {}: {}",
                config.redacted_url(),
                e
            );
            SpotsError::Database(e)
        })?;

        info!("Database connection established ({:?})", backend_type);
        Ok(Self {
            db: Arc::new(db),
            backend_type,
        })
    }

    /// Wrap an existing connection
    pub fn from_connection(db: DatabaseConnection, backend_type: DatabaseBackendType) -> Self {
        Self {
            db: Arc::new(db),
            backend_type,
        }
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&*self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            SpotsError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    ///
    /// While a clone or a bulk writer still holds the connection, the pool
    /// stays open and is closed when the last handle is dropped.
    pub async fn close(self) -> Result<()> {
        match Arc::try_unwrap(self.db) {
            Ok(db) => db.close().await.map_err(SpotsError::Database)?,
            Err(_) => debug!("Connection still shared, leaving the pool open"),
        }
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::Spot::find()
            .limit(1)
            .all(&*self.db)
            .await
            .map_err(SpotsError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }

    /// Database statistics
    pub async fn stats(&self) -> Result<DatabaseStats> {
        Ok(DatabaseStats {
            total_spots: self.count_spots().await?,
            backend: self.backend_type,
        })
    }
}

/// Create the parent directory of a file-backed SQLite database
async fn ensure_sqlite_dir(url: &str) -> Result<()> {
    let Some(path) = sqlite_file_path(url) else {
        return Ok(());
    };
    if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            SpotsError::internal(format!(
                "Failed to create database directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// File path of a `sqlite:` URL; `None` for in-memory databases
fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(path)
    }
}
