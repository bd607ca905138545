use reqwest::StatusCode;
use thiserror::Error;

/// Used when a rejection carries no readable detail.
pub const REJECTION_FALLBACK: &str = "An error occurred";

/// Snapshot retrieval failed; the previous catalog stays in place.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("activity store unreachable: {0}")]
    Transport(String),
    #[error("activity store returned {0}")]
    Status(StatusCode),
    #[error("activity snapshot could not be parsed: {0}")]
    Decode(String),
}

/// A signup or unregister request did not succeed.
#[derive(Debug, Error)]
pub enum MutationError {
    /// The store answered with a failure-class status.
    #[error("{status}: {}", .detail.as_deref().unwrap_or(REJECTION_FALLBACK))]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
    /// No interpretable response was obtained.
    #[error("activity store unreachable: {0}")]
    Transport(String),
}

impl MutationError {
    pub fn rejected(status: StatusCode, detail: &str) -> Self {
        Self::Rejected {
            status,
            detail: Some(detail.to_string()),
        }
    }
}
