//! Error types for artifact classification, fetching, and scoring

use std::time::Duration;
use thiserror::Error;

use crate::artifact::url::Category;

/// Errors that end a single fetch call
#[derive(Debug, Error)]
pub enum TrustError {
    /// Link does not match any known artifact identifier pattern
    #[error("Invalid URL: {link} (category {category})")]
    InvalidUrl { link: String, category: Category },

    /// HTTP client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for trust operations
pub type TrustResult<T> = Result<T, TrustError>;

/// Failure of one upstream request.
///
/// These never abort a fetch; the affected field falls back to its empty
/// default and the failure is recorded as a [`Degradation`](crate::Degradation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or body read failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the per-call timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Upstream answered with a non-2xx status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Body was not the JSON (or base64) shape we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

impl From<base64::DecodeError> for FetchError {
    fn from(e: base64::DecodeError) -> Self {
        FetchError::Parse(format!("base64: {e}"))
    }
}
