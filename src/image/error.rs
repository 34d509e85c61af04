/// Error types for image resolution.
use crate::common::DataUriError;
use std::time::Duration;
use thiserror::Error;

/// Reasons an image locator could not be turned into embeddable bytes.
///
/// The type is `Clone` so a single failed fetch can be reported to every
/// node waiting on the same URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be sent or the connection failed
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("unreadable response body: {0}")]
    Body(String),

    /// The fetch did not complete within the configured limit
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),

    /// An inline `data:` locator could not be decoded
    #[error("invalid data URI: {0}")]
    InvalidDataUri(#[from] DataUriError),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
