//! Error types for the author collection.

use collection_framework::{FrameworkError, RequestError};
use thiserror::Error;

/// Errors that can occur during author operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthorError {
    /// The author is not in the loaded list.
    #[error("Author not found: {0}")]
    NotFound(String),

    /// The submitted form was rejected; carries the message shown next to the field.
    #[error("{0}")]
    Validation(String),

    /// The API call failed; the list was left untouched.
    #[error("Author request failed: {0}")]
    Request(#[from] RequestError),

    /// Authors have not been loaded yet.
    #[error("Authors not loaded")]
    NotLoaded,

    /// An error occurred while communicating with the collection task.
    #[error("Collection error: {0}")]
    CollectionError(String),
}

impl From<FrameworkError> for AuthorError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Request(e) => AuthorError::Request(e),
            FrameworkError::NotFound(id) => AuthorError::NotFound(id),
            FrameworkError::NotLoaded => AuthorError::NotLoaded,
            FrameworkError::EntityError(e) => match e.downcast::<AuthorError>() {
                Ok(e) => *e,
                Err(e) => AuthorError::CollectionError(e.to_string()),
            },
            other => AuthorError::CollectionError(other.to_string()),
        }
    }
}
