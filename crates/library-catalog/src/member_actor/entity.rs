//! [`ActorEntity`] implementation for [`Member`].
//!
//! Borrowing checks the limit, then asks the library for a copy, then records
//! the loan. All three steps run inside one action, so two concurrent borrows
//! by the same member cannot both pass the limit check.
//!
//! A return clears the loan even when the library can no longer take the copy
//! back (the book was withdrawn or its shelf is already full); the error is
//! still reported to the caller.

use super::actions::{MemberAction, MemberActionResult};
use super::error::MemberError;
use crate::book_actor::LibraryError;
use crate::model::{Member, MemberCreate, MemberUpdate, UserId, DEFAULT_MAX_BOOKS};
use async_trait::async_trait;
use catalog_framework::ActorEntity;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Member {
    type Id = UserId;
    type Create = MemberCreate;
    type Update = MemberUpdate;
    type Action = MemberAction;
    type ActionResult = MemberActionResult;
    type Context = ();
    type Error = MemberError;

    fn key_of(params: &MemberCreate) -> UserId {
        params.id.clone()
    }

    fn from_create_params(id: UserId, params: MemberCreate) -> Result<Self, MemberError> {
        let max_books = params.max_books.unwrap_or(DEFAULT_MAX_BOOKS);
        if max_books == 0 {
            return Err(MemberError::InvalidBorrowLimit(max_books));
        }
        Ok(Self::new(id, params.name, max_books))
    }

    /// A new limit may not drop below the number of books already held.
    async fn on_update(&mut self, update: MemberUpdate, _ctx: &()) -> Result<(), MemberError> {
        if let Some(max_books) = update.max_books {
            if max_books == 0 || (max_books as usize) < self.borrowed.len() {
                return Err(MemberError::InvalidBorrowLimit(max_books));
            }
            self.max_books = max_books;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    /// A member still holding books cannot be removed.
    async fn on_delete(&self, _ctx: &()) -> Result<(), MemberError> {
        if !self.borrowed.is_empty() {
            warn!(member = %self.id, held = self.borrowed.len(), "Delete refused, loans outstanding");
            return Err(MemberError::HasLoans(self.borrowed.len()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MemberAction,
        _ctx: &(),
    ) -> Result<MemberActionResult, MemberError> {
        match action {
            MemberAction::Borrow { library, isbn } => {
                if self.at_limit() {
                    warn!(member = %self.id, limit = self.max_books, "Borrow limit reached");
                    return Err(MemberError::BorrowLimitReached {
                        limit: self.max_books,
                    });
                }
                let left = library.borrow_copy(&isbn).await?;
                info!(member = %self.id, library = library.name(), %isbn, left, "Borrowed");
                self.borrowed.push(isbn);
                Ok(MemberActionResult::Borrow(self.borrowed.len()))
            }
            MemberAction::Return { library, isbn } => {
                let Some(position) = self.borrowed.iter().position(|held| *held == isbn) else {
                    warn!(member = %self.id, %isbn, "Return of a book not held");
                    return Err(MemberError::NotBorrowed(isbn));
                };
                match library.return_copy(&isbn).await {
                    Ok(on_shelf) => {
                        self.borrowed.remove(position);
                        info!(member = %self.id, library = library.name(), %isbn, on_shelf, "Returned");
                        Ok(MemberActionResult::Return(self.borrowed.len()))
                    }
                    // The library no longer tracks this copy, so the loan is cleared anyway.
                    Err(e @ (LibraryError::BookNotFound(_) | LibraryError::AllCopiesReturned(_))) => {
                        self.borrowed.remove(position);
                        warn!(member = %self.id, library = library.name(), %isbn, error = %e, "Loan cleared without reshelving");
                        Err(e.into())
                    }
                    Err(e) => Err(e.into()),
                }
            }
        }
    }
}
