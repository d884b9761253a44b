//! Error types for output writing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing the output table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// The output file could not be created or written as CSV.
    #[error("failed to write {}", .path.display())]
    Csv {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying csv/io error.
        #[source]
        source: csv::Error,
    },

    /// Flushing the writer to disk failed.
    #[error("failed to flush {}", .path.display())]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
