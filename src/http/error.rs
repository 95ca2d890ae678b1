//! Error types for the HTTP client.

use thiserror::Error;

/// Errors that can occur while talking to a remote provider.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not JSON.
    #[error("Failed to parse response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HttpError>;
