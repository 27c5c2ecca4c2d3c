//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use sea_orm::ConnectionTrait;
use std::sync::Arc;
use surf_spots::config::DatabaseConfig;
use surf_spots::storage::database::Database;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new, migrated in-memory test database
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }

    /// Make every INSERT of a spot named `name` fail inside the store
    pub async fn fail_inserts_named(&self, name: &str) {
        let sql = format!(
            "CREATE TRIGGER fail_insert BEFORE INSERT ON spots \
             WHEN NEW.name = '{}' \
             BEGIN SELECT RAISE(ABORT, 'insert rejected'); END;",
            name.replace('\'', "''")
        );
        self.inner
            .connection()
            .execute_unprepared(&sql)
            .await
            .expect("Failed to create trigger");
    }
}

/// In-memory SQLite only supports a single connection
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
    }
}
