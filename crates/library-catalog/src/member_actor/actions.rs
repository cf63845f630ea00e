//! Custom actions for the Member actor.
//!
//! Both actions carry the [`LibraryClient`] they act on: a member is not tied
//! to one library, the caller names it on every request.

use crate::clients::LibraryClient;
use crate::model::Isbn;

#[derive(Debug, Clone)]
pub enum MemberAction {
    /// Borrow one copy of `isbn` from `library`.
    ///
    /// # Errors
    /// `BorrowLimitReached` (checked before the library is contacted),
    /// `BookNotFound`, `NoCopiesAvailable`.
    Borrow { library: LibraryClient, isbn: Isbn },
    /// Give one copy of `isbn` back to `library`.
    ///
    /// # Errors
    /// `NotBorrowed` when the member does not hold the book (the library is
    /// not contacted), `BookNotFound` when it left the catalog meanwhile.
    /// In the last case the loan is still cleared.
    Return { library: LibraryClient, isbn: Isbn },
}

/// Results from MemberActions - each carries the number of books held afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberActionResult {
    Borrow(usize),
    Return(usize),
}
