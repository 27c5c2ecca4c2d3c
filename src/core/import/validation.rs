//! Entry sanitization and validation
//!
//! Each entry is checked on its own; the outcome for one entry never depends
//! on the others.

use super::error::{EntryFailure, ValidationError};
use crate::core::models::{SpotEntry, is_valid_country_code};
use serde::{Deserialize, Serialize};

const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// How a run reacts to invalid entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Stop at the first invalid entry
    #[default]
    FailFast,
    /// Check every entry and report all failures
    CollectAll,
}

/// Trim the textual fields of an entry
pub fn sanitize(mut entry: SpotEntry) -> SpotEntry {
    trim_in_place(&mut entry.name);
    trim_in_place(&mut entry.locality);
    trim_in_place(&mut entry.country_code);
    entry
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Check an already sanitized entry against the field constraints
pub fn validate(entry: &SpotEntry) -> Result<(), ValidationError> {
    if entry.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if entry.locality.is_empty() {
        return Err(ValidationError::EmptyLocality);
    }
    if !is_valid_country_code(&entry.country_code) {
        return Err(ValidationError::UnknownCountryCode(
            entry.country_code.clone(),
        ));
    }

    let coordinates = entry.coordinates;
    // NaN fails `contains`, so non-finite values are rejected here as well
    if !LATITUDE_RANGE.contains(&coordinates.latitude) {
        return Err(ValidationError::LatitudeOutOfRange(coordinates.latitude));
    }
    if !LONGITUDE_RANGE.contains(&coordinates.longitude) {
        return Err(ValidationError::LongitudeOutOfRange(coordinates.longitude));
    }

    Ok(())
}

/// Sanitize then validate a single entry
pub fn sanitize_and_validate(entry: SpotEntry) -> Result<SpotEntry, ValidationError> {
    let entry = sanitize(entry);
    validate(&entry)?;
    Ok(entry)
}

/// Sanitize and validate a whole candidate sequence.
///
/// Returns the sanitized entries in source order, or the failures found.
/// In `FailFast` mode the failure list holds exactly one element.
pub fn validate_entries(
    entries: Vec<SpotEntry>,
    mode: ValidationMode,
) -> Result<Vec<SpotEntry>, Vec<EntryFailure>> {
    let mut valid = Vec::with_capacity(entries.len());
    let mut failures = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        match sanitize_and_validate(entry) {
            Ok(entry) => valid.push(entry),
            Err(error) => {
                failures.push(EntryFailure { index, error });
                if mode == ValidationMode::FailFast {
                    break;
                }
            }
        }
    }

    if failures.is_empty() {
        Ok(valid)
    } else {
        Err(failures)
    }
}
