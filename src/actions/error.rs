//! Error payload carried by [`Action::Error`](super::Action::Error).

use crate::endpoint::EndpointError;
use crate::http::HttpError;
use serde_json::Value;
use thiserror::Error;

/// Why a fetch failed.
///
/// Every variant reaches the store as the same `Action::Error` kind; the
/// variant only exists for logging and for callers awaiting a promise-mode
/// fetch.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    /// Transport failure or non-success status.
    #[error("Request failed: {0}")]
    Http(String),

    /// The provider answered with a body of the wrong shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The request URL could not be built.
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] EndpointError),

    /// A well-formed reply that reports failure (e.g. a refused signup).
    #[error("Request rejected: {0}")]
    Rejected(Value),
}

impl From<HttpError> for ActionError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Decode(e) => ActionError::Decode(e.to_string()),
            other => ActionError::Http(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(e: serde_json::Error) -> Self {
        ActionError::Decode(e.to_string())
    }
}
