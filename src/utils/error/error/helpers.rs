//! Helper functions for creating specific error types

use super::types::SpotsError;

/// Helper functions for creating specific errors
impl SpotsError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn geocoding<S: Into<String>>(message: S) -> Self {
        Self::Geocoding(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error is the benign "empty import" outcome
    pub fn is_nothing_to_import(&self) -> bool {
        matches!(self, Self::Import(e) if e.is_nothing_to_import())
    }
}
