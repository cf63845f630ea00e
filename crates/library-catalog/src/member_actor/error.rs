//! Error types for the Member actor.

use crate::book_actor::LibraryError;
use crate::model::{Isbn, UserId};
use thiserror::Error;

/// Errors that can occur during member operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberError {
    /// The member already holds as many books as allowed.
    #[error("Borrow limit reached ({limit})")]
    BorrowLimitReached { limit: u32 },

    #[error("Book not found: {0}")]
    BookNotFound(Isbn),

    #[error("No copies available: {0}")]
    NoCopiesAvailable(Isbn),

    /// The member tried to return a book they do not hold.
    #[error("Book not borrowed by this member: {0}")]
    NotBorrowed(Isbn),

    #[error("Member not found: {0}")]
    NotFound(UserId),

    #[error("Member already exists: {0}")]
    AlreadyExists(UserId),

    /// The member still holds this many books.
    #[error("Member still holds {0} book(s)")]
    HasLoans(usize),

    /// Limits must be positive and cover the books already held.
    #[error("Invalid borrow limit: {0}")]
    InvalidBorrowLimit(u32),

    /// Any other library failure.
    #[error("Library error: {0}")]
    Library(LibraryError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MemberError {
    fn from(msg: String) -> Self {
        MemberError::ActorCommunicationError(msg)
    }
}

impl From<LibraryError> for MemberError {
    fn from(e: LibraryError) -> Self {
        match e {
            LibraryError::BookNotFound(isbn) => MemberError::BookNotFound(isbn),
            LibraryError::NoCopiesAvailable(isbn) => MemberError::NoCopiesAvailable(isbn),
            other => MemberError::Library(other),
        }
    }
}
