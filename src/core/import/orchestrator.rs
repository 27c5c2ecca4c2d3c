//! Import orchestration: source → sanitize/validate → bulk writer

use super::error::ImportError;
use super::source::EntrySource;
use super::validation::{ValidationMode, validate_entries};
use super::writer::{ImportControl, SpotWriter};
use tracing::{info, warn};

/// Options of one import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Reaction to invalid entries
    pub validation: ValidationMode,
}

/// Run one import end to end.
///
/// The source is read once, in full; nothing is written unless every entry
/// validates. Returns the number of persisted spots.
pub async fn import_spots<S, W>(
    source: &S,
    writer: &W,
    options: &ImportOptions,
    control: &ImportControl,
) -> Result<u64, ImportError>
where
    S: EntrySource + ?Sized,
    W: SpotWriter + ?Sized,
{
    let entries = source.fetch_all().await.map_err(ImportError::Read)?;
    info!("Fetched {} candidate entries", entries.len());

    let entries = validate_entries(entries, options.validation).map_err(|failures| {
        warn!("{} invalid entries, nothing written", failures.len());
        ImportError::Validate(failures)
    })?;

    let count = writer
        .write_spots(&entries, control)
        .await
        .map_err(ImportError::Write)?;

    Ok(count)
}
