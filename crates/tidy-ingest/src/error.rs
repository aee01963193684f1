//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a table from being loaded.
///
/// Only structural problems end up here. Cell contents are never validated
/// at load time; every field is kept as raw text for the cleaning stages.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The reader could not frame a record.
    #[error("failed to parse CSV {path} at line {line}: {message}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// CSV input is empty.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// The header row has no usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    /// A data row has a different number of fields than the header.
    #[error("row at line {line} of {path} has {found} fields, expected {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl IngestError {
    pub(crate) fn from_csv(path: PathBuf, err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::RaggedRow {
                path,
                line,
                expected: *expected_len as usize,
                found: *len as usize,
            },
            csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                Self::FileNotFound { path }
            }
            _ => Self::CsvParse {
                path,
                line,
                message: err.to_string(),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_ragged_row_display() {
        let err = IngestError::RaggedRow {
            path: PathBuf::from("orders.csv"),
            line: 3,
            expected: 4,
            found: 5,
        };
        assert_eq!(
            err.to_string(),
            "row at line 3 of orders.csv has 5 fields, expected 4"
        );
    }
}
