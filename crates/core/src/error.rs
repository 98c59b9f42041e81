//! Fetch error model.

use thiserror::Error;

/// Result type for detail fetches.
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure modes for a detail fetch.
///
/// Keep this focused on what the UI must distinguish: a malformed body is
/// surfaced to the user the same way as a transport failure, so all three
/// variants travel the same recovery path (panel stays closed, retriable).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (network unreachable, request aborted).
    #[error("request failed: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// Body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
