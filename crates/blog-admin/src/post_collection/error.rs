//! Error types for the post collection.

use collection_framework::{FrameworkError, RequestError};
use thiserror::Error;

/// Errors that can occur during post operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PostError {
    /// The post is not in the loaded list.
    #[error("Post not found: {0}")]
    NotFound(String),

    /// The submitted form was rejected; carries the message shown next to the field.
    #[error("{0}")]
    Validation(String),

    /// The API call failed; the list was left untouched.
    #[error("Post request failed: {0}")]
    Request(#[from] RequestError),

    /// Posts have not been loaded yet.
    #[error("Posts not loaded")]
    NotLoaded,

    /// An error occurred while communicating with the collection task.
    #[error("Collection error: {0}")]
    CollectionError(String),
}

impl From<FrameworkError> for PostError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Request(e) => PostError::Request(e),
            FrameworkError::NotFound(id) => PostError::NotFound(id),
            FrameworkError::NotLoaded => PostError::NotLoaded,
            FrameworkError::EntityError(e) => match e.downcast::<PostError>() {
                Ok(e) => *e,
                Err(e) => PostError::CollectionError(e.to_string()),
            },
            other => PostError::CollectionError(other.to_string()),
        }
    }
}
