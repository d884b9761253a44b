//! Error types for record normalization.

use thiserror::Error;

/// Errors raised while normalizing lookup records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// A date field carried a non-empty value that is not `YYYY-MM-DD`.
    ///
    /// This means the upstream schema changed; writing the report with a
    /// guessed or blank date would silently corrupt it, so the run aborts.
    #[error("unexpected date format in {field}: {value:?}")]
    DateFormat {
        /// Raw API field name the value came from.
        field: &'static str,
        /// The offending value.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
