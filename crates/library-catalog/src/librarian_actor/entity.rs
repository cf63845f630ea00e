//! [`ActorEntity`] implementation for [`Librarian`].

use super::actions::{LibrarianAction, LibrarianActionResult};
use super::error::LibrarianError;
use crate::model::{Librarian, LibrarianCreate, LibrarianUpdate, UserId};
use async_trait::async_trait;
use catalog_framework::ActorEntity;
use tracing::info;

#[async_trait]
impl ActorEntity for Librarian {
    type Id = UserId;
    type Create = LibrarianCreate;
    type Update = LibrarianUpdate;
    type Action = LibrarianAction;
    type ActionResult = LibrarianActionResult;
    type Context = ();
    type Error = LibrarianError;

    fn key_of(params: &LibrarianCreate) -> UserId {
        params.id.clone()
    }

    fn from_create_params(id: UserId, params: LibrarianCreate) -> Result<Self, LibrarianError> {
        Ok(Self::new(id, params.name))
    }

    async fn on_update(&mut self, update: LibrarianUpdate, _ctx: &()) -> Result<(), LibrarianError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: LibrarianAction,
        _ctx: &(),
    ) -> Result<LibrarianActionResult, LibrarianError> {
        match action {
            LibrarianAction::AddBook { library, book } => {
                let isbn = library.add_book(book).await?;
                info!(librarian = %self.id, library = library.name(), %isbn, "Catalogued");
                Ok(LibrarianActionResult::AddBook(isbn))
            }
            LibrarianAction::RemoveBook { library, isbn } => {
                library.remove_book(&isbn).await?;
                info!(librarian = %self.id, library = library.name(), %isbn, "Withdrawn");
                Ok(LibrarianActionResult::RemoveBook(isbn))
            }
            LibrarianAction::UpdateBook {
                library,
                isbn,
                update,
            } => {
                let book = library.update_book(&isbn, update).await?;
                Ok(LibrarianActionResult::UpdateBook(book))
            }
        }
    }
}
