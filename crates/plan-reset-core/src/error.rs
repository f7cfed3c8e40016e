//! Error types for the reset operation

use thiserror::Error;

/// Failures that prevent the reset request from producing a status code
///
/// A non-2xx answer from the backend is not an error: it comes back as the
/// status of a [`ResetOutcome`](crate::ResetOutcome).
#[derive(Debug, Error)]
pub enum ResetError {
    /// DNS, connection or protocol failure talking to the backend
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured project URL cannot be turned into an endpoint
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The patch body could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
