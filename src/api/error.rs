//! API error types.

use thiserror::Error;

/// Errors raised while talking to the plant API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No browser window (not running in a page).
    #[error("No window available")]
    NoWindow,

    /// Request rejected before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response.
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// Body was not the JSON we expected.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Detail lookup came back empty.
    #[error("Plant not found: {0}")]
    PlantNotFound(u32),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
