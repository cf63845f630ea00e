//! [`ActorEntity`] implementation for [`Book`].
//!
//! The shelf rules themselves live on [`Book`]; this impl maps the
//! [`BookAction`] messages onto them.

use super::actions::{BookAction, BookActionResult};
use super::error::BookError;
use crate::model::{Book, BookCreate, BookUpdate, Isbn};
use async_trait::async_trait;
use catalog_framework::ActorEntity;

#[async_trait]
impl ActorEntity for Book {
    type Id = Isbn;
    type Create = BookCreate;
    type Update = BookUpdate;
    type Action = BookAction;
    type ActionResult = BookActionResult;
    type Context = ();
    type Error = BookError;

    fn key_of(params: &BookCreate) -> Isbn {
        params.isbn.clone()
    }

    fn from_create_params(id: Isbn, params: BookCreate) -> Result<Self, BookError> {
        Ok(Self::new(id, params.title, params.author, params.copies))
    }

    /// Handles corrections to title and author. Copy counts are not editable.
    async fn on_update(&mut self, update: BookUpdate, _ctx: &()) -> Result<(), BookError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BookAction,
        _ctx: &(),
    ) -> Result<BookActionResult, BookError> {
        match action {
            BookAction::Borrow => {
                self.borrow()?;
                Ok(BookActionResult::Borrow(self.available()))
            }
            BookAction::Return => {
                self.returned()?;
                Ok(BookActionResult::Return(self.available()))
            }
            BookAction::CheckAvailability => Ok(BookActionResult::CheckAvailability(self.available())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_framework::{FrameworkError, ResourceActor};

    #[tokio::test]
    async fn zero_copy_book_is_catalogued_but_not_lendable() {
        let (actor, client) = ResourceActor::<Book>::new(8);
        tokio::spawn(actor.run(()));

        let isbn = client
            .create(BookCreate::new("978-0", "Empty", "Nobody", 0))
            .await
            .unwrap();
        let book = client.get(isbn.clone()).await.unwrap().unwrap();
        assert_eq!(book.available(), 0);

        let err = client.perform_action(isbn, BookAction::Borrow).await.unwrap_err();
        assert!(matches!(
            err.into_entity_error::<BookError>(),
            Ok(BookError::NoCopiesAvailable(isbn)) if isbn.as_str() == "978-0"
        ));
    }

    #[tokio::test]
    async fn actions_report_shelf_count() {
        let (actor, client) = ResourceActor::<Book>::new(8);
        tokio::spawn(actor.run(()));
        let isbn = client
            .create(BookCreate::new("978-1", "Python 101", "Jake", 1))
            .await
            .unwrap();

        let lent = client.perform_action(isbn.clone(), BookAction::Borrow).await.unwrap();
        assert_eq!(lent, BookActionResult::Borrow(0));

        let err = client.perform_action(isbn.clone(), BookAction::Borrow).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        let back = client.perform_action(isbn.clone(), BookAction::Return).await.unwrap();
        assert_eq!(back, BookActionResult::Return(1));

        let count = client
            .perform_action(isbn, BookAction::CheckAvailability)
            .await
            .unwrap();
        assert_eq!(count, BookActionResult::CheckAvailability(1));
    }
}
