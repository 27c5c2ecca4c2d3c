//! Bulk import configuration

use super::*;
use crate::core::import::ValidationMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bulk import configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Rows per INSERT statement
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Reaction to invalid entries
    #[serde(default)]
    pub validation: ValidationMode,
    /// Abort the run after this many seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            validation: ValidationMode::default(),
            timeout_secs: None,
            delimiter: default_delimiter(),
        }
    }
}

impl ImportConfig {
    /// Run timeout, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Option<u8> {
        u8::try_from(self.delimiter).ok().filter(u8::is_ascii)
    }
}
