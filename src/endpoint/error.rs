//! Error types for endpoint construction.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EndpointError {
    /// A resource name that the content API does not expose.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// A configured base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
