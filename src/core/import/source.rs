//! Entry sources
//!
//! A source hands over the complete, ordered candidate sequence in one call.
//! Any malformed record aborts the whole read; partial reads are never
//! returned.

use super::error::SourceError;
use crate::core::models::SpotEntry;
use async_trait::async_trait;
use csv_async::{AsyncReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use tokio::io::AsyncRead;
use tracing::{debug, info};

/// Column layout expected by [`CsvEntrySource`]
pub const CSV_COLUMNS: [&str; 5] = ["name", "latitude", "longitude", "locality", "country_code"];

/// Produces the candidate entries of one import run
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch every entry, in source order
    async fn fetch_all(&self) -> Result<Vec<SpotEntry>, SourceError>;
}

/// Delimited text file with a header row and the columns in [`CSV_COLUMNS`]
#[derive(Debug, Clone)]
pub struct CsvEntrySource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvEntrySource {
    /// Comma separated source at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse entries from any async reader
    pub async fn read_from<R>(&self, reader: R) -> Result<Vec<SpotEntry>, SourceError>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut rdr = AsyncReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .create_reader(reader);

        let mut entries = Vec::new();
        let mut record = StringRecord::new();

        while rdr.read_record(&mut record).await? {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            entries.push(parse_record(&record, line)?);
        }

        debug!("Parsed {} entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }
}

#[async_trait]
impl EntrySource for CsvEntrySource {
    async fn fetch_all(&self) -> Result<Vec<SpotEntry>, SourceError> {
        info!("Reading spot entries from {}", self.path.display());

        let file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|source| SourceError::Open {
                path: self.path.clone(),
                source,
            })?;

        self.read_from(file).await
    }
}

fn parse_record(record: &StringRecord, line: u64) -> Result<SpotEntry, SourceError> {
    if record.len() != CSV_COLUMNS.len() {
        return Err(SourceError::Malformed {
            line,
            reason: format!(
                "expected {} fields, found {}",
                CSV_COLUMNS.len(),
                record.len()
            ),
        });
    }

    let latitude = parse_coordinate(record, 1, line)?;
    let longitude = parse_coordinate(record, 2, line)?;

    Ok(SpotEntry::new(
        &record[0],
        latitude,
        longitude,
        &record[3],
        &record[4],
    ))
}

fn parse_coordinate(record: &StringRecord, index: usize, line: u64) -> Result<f64, SourceError> {
    let raw = &record[index];
    raw.trim()
        .parse::<f64>()
        .map_err(|e| SourceError::Malformed {
            line,
            reason: format!("{} {:?} is not a number: {}", CSV_COLUMNS[index], raw, e),
        })
}

/// Entries held in memory, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticEntrySource {
    entries: Vec<SpotEntry>,
}

impl StaticEntrySource {
    pub fn new(entries: Vec<SpotEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl EntrySource for StaticEntrySource {
    async fn fetch_all(&self) -> Result<Vec<SpotEntry>, SourceError> {
        Ok(self.entries.clone())
    }
}
