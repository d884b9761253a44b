//! Error types for input-table ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the input table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The input file could not be opened or parsed as CSV.
    #[error("failed to read {}", .path.display())]
    Csv {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying csv/io error.
        #[source]
        source: csv::Error,
    },

    /// The configured serial-number column is not in the header row.
    #[error("serial number column {column:?} not found in input header")]
    MissingColumn {
        /// The column name that was requested.
        column: String,
    },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
