//! Error types for the export module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing result files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// File system error (directory creation, file create, write, flush).
    #[error("IO error writing {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("JSON serialization failed for {path}: {source}")]
    Json {
        /// The JSON output path.
        path: PathBuf,
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// CSV writing failed.
    #[error("CSV error writing {path}: {source}")]
    Csv {
        /// The CSV output path.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A record's field set differs from the first record's, so it cannot
    /// be written under the established CSV header.
    #[error("record {index} field set does not match the first record")]
    FieldMismatch {
        /// Zero-based index of the offending record.
        index: usize,
    },
}

impl ExportError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a JSON serialization error.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Creates a CSV error.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
