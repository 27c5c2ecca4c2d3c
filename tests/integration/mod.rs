//! Integration tests for surf-spots
//!
//! These tests run the import pipeline and the spot store against a real
//! in-memory SQLite database.

pub mod config_tests;
pub mod import_tests;
pub mod spot_store_tests;
