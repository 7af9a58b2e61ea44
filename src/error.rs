//! Error types for calculation API calls.

use thiserror::Error;

/// Message shown when the backend fails without saying why.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Everything that can go wrong between submitting a form and rendering
/// its result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend rejected the request and explained why.
    #[error("{0}")]
    Server(String),

    /// The backend returned an error status without an `error` field.
    #[error("{}", UNKNOWN_ERROR)]
    Unknown,

    /// No response was received.
    #[error("Network request failed: {0}")]
    Transport(String),

    /// A response arrived but its body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// True for failures of the exchange itself rather than backend verdicts.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Encode(_)
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
