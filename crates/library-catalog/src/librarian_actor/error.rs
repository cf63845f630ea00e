//! Error types for the Librarian actor.

use crate::book_actor::LibraryError;
use crate::model::UserId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LibrarianError {
    #[error("Librarian not found: {0}")]
    NotFound(UserId),

    #[error("Librarian already exists: {0}")]
    AlreadyExists(UserId),

    /// The catalog refused the change.
    #[error(transparent)]
    Library(#[from] LibraryError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LibrarianError {
    fn from(msg: String) -> Self {
        LibrarianError::ActorCommunicationError(msg)
    }
}
