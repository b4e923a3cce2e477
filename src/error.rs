//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// The requested entity does not exist (chip not tracked, unknown
    /// symbol, no balance for an asset).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or duplicate client-side input, rejected before any
    /// network call is made.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Transport and non-2xx errors from the REST gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}
