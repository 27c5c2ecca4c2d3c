//! Import pipeline errors, one type per stage

use super::batch::Batch;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single field constraint violated by a candidate entry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("locality is required")]
    EmptyLocality,

    #[error("country code {0:?} is not a valid ISO 3166-1 alpha-2 code")]
    UnknownCountryCode(String),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A validation failure tied to the entry's position in the source
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFailure {
    /// Zero-based index of the entry
    pub index: usize,
    pub error: ValidationError,
}

impl fmt::Display for EntryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {}: {}", self.index, self.error)
    }
}

/// The entry source could not be read or parsed
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("malformed record on line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

/// Failure of the transactional write stage
#[derive(Error, Debug)]
pub enum WriteError {
    /// Benign outcome for an empty run; no transaction was opened
    #[error("nothing to import")]
    NothingToImport,

    #[error("batch size must be greater than 0")]
    InvalidBatchSize,

    #[error("failed to begin transaction: {0}")]
    Begin(#[source] sea_orm::DbErr),

    #[error("insert of batch {batch} failed: {source}")]
    Exec {
        batch: Batch,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("insert of batch {batch} affected {affected} row(s), expected {expected}")]
    RowCountMismatch {
        batch: Batch,
        expected: u64,
        affected: u64,
    },

    #[error("failed to commit transaction: {0}")]
    Commit(#[source] sea_orm::DbErr),

    #[error("import cancelled")]
    Cancelled,

    #[error("import deadline exceeded")]
    DeadlineExceeded,
}

/// Terminal error of an import run, tagged with the failing stage
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("read stage: {0}")]
    Read(#[from] SourceError),

    #[error("validate stage: {}", describe_failures(.0))]
    Validate(Vec<EntryFailure>),

    #[error("write stage: {0}")]
    Write(#[from] WriteError),
}

impl ImportError {
    /// Whether the run had nothing to import
    pub fn is_nothing_to_import(&self) -> bool {
        matches!(self, Self::Write(WriteError::NothingToImport))
    }

    /// Validation failures, empty for other stages
    pub fn failures(&self) -> &[EntryFailure] {
        match self {
            Self::Validate(failures) => failures,
            _ => &[],
        }
    }
}

fn describe_failures(failures: &[EntryFailure]) -> String {
    match failures {
        [] => "no failures recorded".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}
