//! Spot persistence on SeaORM
//!
//! `entities` maps the `spots` table, `migration` creates it and `seaorm_db`
//! holds the connection plus the single-row and bulk operations.

pub mod entities;
pub mod migration;
pub mod seaorm_db;

pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::{DatabaseBackendType, DatabaseStats};
