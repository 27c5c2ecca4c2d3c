//! Error handling for the spot directory
//!
//! This module defines the error type shared by configuration, storage and services.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{Result, SpotsError};
