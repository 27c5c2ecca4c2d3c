//! Core functionality for the spot directory
//!
//! Domain models and the bulk import pipeline.

pub mod import;
pub mod models;
