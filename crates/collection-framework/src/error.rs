//! # Framework Errors
//!
//! This module defines the common error types used throughout the collection framework.
//! [`RequestError`] is the single failure kind of the remote gateway; [`FrameworkError`]
//! wraps it together with the failures of the collection task itself.

/// Failure of a single remote call.
///
/// Raised when the response status is outside the 2xx range, when the request never
/// completes, or when a successful body cannot be decoded. The error path never parses
/// the response body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("network: {0}")]
    Network(String),
    #[error("decode: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RequestError::Decode(e.to_string())
        } else {
            RequestError::Network(e.to_string())
        }
    }
}

/// Errors that can occur within the collection framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Collection closed")]
    CollectionClosed,
    #[error("Collection dropped response channel")]
    CollectionDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Collection not loaded")]
    NotLoaded,
    #[error("Collection already loaded")]
    AlreadyLoaded,
    #[error("Delete not confirmed: {0}")]
    DeleteRejected(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),
}

impl FrameworkError {
    /// The remote failure behind this error, if any.
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            FrameworkError::Request(e) => Some(e),
            _ => None,
        }
    }
}
