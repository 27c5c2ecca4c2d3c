//! Storage layer for the spot directory
//!
//! This module provides data persistence.

/// Database storage module
pub mod database;

pub use database::{Database, DatabaseBackendType, DatabaseStats};
