//! Chat request error types.

/// Placeholder shown when the endpoint answers with something that is not JSON.
const INVALID_JSON_RESPONSE: &str = "Invalid JSON response";

/// Errors from the single chat request. Every variant ends up as an error bubble.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{}", INVALID_JSON_RESPONSE)]
    InvalidResponse,
    #[error("{0}")]
    Format(#[from] crate::core::format::FormatError),
    #[error("request worker stopped before replying")]
    WorkerStopped,
}
