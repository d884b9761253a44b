//! Error types for the EoX API clients.

use thiserror::Error;

/// Errors raised by the token and lookup clients.
///
/// Token errors are fatal to a run: without a bearer token no lookup can
/// succeed. Lookup errors are scoped to one batch; the driver recovers them
/// as "no records for these serials" and keeps going.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The OAuth endpoint rejected the token request.
    #[error("token request rejected ({status}): {message}")]
    TokenRequest {
        /// HTTP status returned by the token endpoint.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The token endpoint answered 2xx but the body had no `access_token`.
    #[error("token response missing access_token")]
    TokenResponse(#[source] serde_json::Error),

    /// The lookup endpoint returned a non-success status for one batch.
    #[error("lookup request failed with status {status}")]
    LookupStatus {
        /// HTTP status returned by the lookup endpoint.
        status: u16,
    },

    /// The lookup endpoint answered 2xx but the body was not the expected
    /// record shape.
    #[error("malformed lookup response")]
    LookupResponse(#[source] serde_json::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
