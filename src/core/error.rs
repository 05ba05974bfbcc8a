//! Error types for import, export and report generation

use super::locale::Locale;
use std::path::PathBuf;
use thiserror::Error;

/// Why a parsed value was rejected as a dataset
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// Top-level value is not an array
    #[error("expected a JSON array of academic year records")]
    NotAnArray,
    /// Top-level array has no elements
    #[error("the record list is empty")]
    Empty,
    /// First element has no truthy `year`
    #[error("the first record has no 'year' field")]
    MissingYear,
    /// A record does not decode into an academic year record
    #[error("record {index}: {message}")]
    Record {
        /// Zero-based position in the array
        index: usize,
        /// Decoder message
        message: String,
    },
}

/// Errors raised by dataset import. The held dataset is never modified when
/// one of these is returned.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not parseable JSON
    #[error("input is not valid JSON: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// The JSON parsed but does not have the dataset shape
    #[error("invalid dataset: {0}")]
    InvalidShape(#[from] ShapeError),

    /// The import file could not be read as UTF-8 text
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    /// Localized one-line notice suitable for showing to an operator
    #[must_use]
    pub const fn notice(&self, locale: Locale) -> &'static str {
        let labels = locale.labels();
        match self {
            Self::InvalidShape(_) => labels.invalid_format,
            Self::MalformedInput(_) | Self::Unreadable { .. } => labels.read_failure,
        }
    }
}

/// Errors raised while exporting a dataset
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization failed
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the export file failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while rendering or writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// No computed year has the requested id
    #[error("no academic year with id '{0}'")]
    UnknownYear(String),

    /// Writing the report file failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
