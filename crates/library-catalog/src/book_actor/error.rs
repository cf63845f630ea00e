//! Error types for the Book actor.

use crate::model::Isbn;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// Every copy is out on loan.
    #[error("No copies available: {0}")]
    NoCopiesAvailable(Isbn),

    /// A return arrived while every copy was already on the shelf.
    #[error("All copies already returned: {0}")]
    AllCopiesReturned(Isbn),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BookError {
    fn from(msg: String) -> Self {
        BookError::ActorCommunicationError(msg)
    }
}

/// Errors returned by [`LibraryClient`](crate::clients::LibraryClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LibraryError {
    /// No book with this ISBN is in the catalog.
    #[error("Book not found: {0}")]
    BookNotFound(Isbn),

    /// The catalog already holds a book with this ISBN.
    #[error("Duplicate ISBN: {0}")]
    DuplicateIsbn(Isbn),

    #[error("No copies available: {0}")]
    NoCopiesAvailable(Isbn),

    #[error("All copies already returned: {0}")]
    AllCopiesReturned(Isbn),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LibraryError {
    fn from(msg: String) -> Self {
        LibraryError::ActorCommunicationError(msg)
    }
}

impl From<BookError> for LibraryError {
    fn from(e: BookError) -> Self {
        match e {
            BookError::NoCopiesAvailable(isbn) => LibraryError::NoCopiesAvailable(isbn),
            BookError::AllCopiesReturned(isbn) => LibraryError::AllCopiesReturned(isbn),
            BookError::ActorCommunicationError(msg) => LibraryError::ActorCommunicationError(msg),
        }
    }
}
