//! # Library Client
//!
//! A named handle on the Book actor. Members and librarians receive it as a
//! parameter; nobody owns the library.
use crate::book_actor::{BookAction, BookActionResult, BookError, LibraryError};
use crate::model::{Book, BookCreate, BookUpdate, Isbn};
use catalog_framework::{FrameworkError, ResourceClient};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for one library's catalog.
///
/// Catalog changes (`add_book`, `remove_book`, `update_book`) are crate-private
/// and reached through a [`LibrarianClient`](crate::clients::LibrarianClient).
/// Lending and returning single copies is open to any caller.
#[derive(Clone)]
pub struct LibraryClient {
    name: Arc<str>,
    inner: ResourceClient<Book>,
}

impl fmt::Debug for LibraryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.name, f)
    }
}

impl LibraryClient {
    pub fn new(name: impl Into<Arc<str>>, inner: ResourceClient<Book>) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn map_error(e: FrameworkError) -> LibraryError {
        match e {
            FrameworkError::NotFound(id) => LibraryError::BookNotFound(Isbn(id)),
            FrameworkError::AlreadyExists(id) => LibraryError::DuplicateIsbn(Isbn(id)),
            other => match other.into_entity_error::<BookError>() {
                Ok(book_error) => book_error.into(),
                Err(other) => LibraryError::ActorCommunicationError(other.to_string()),
            },
        }
    }

    /// Looks a book up by ISBN. `Ok(None)` means it is not in the catalog.
    #[instrument(skip(self), fields(library = %self.name))]
    pub async fn find_book(&self, isbn: &Isbn) -> Result<Option<Book>, LibraryError> {
        debug!("Sending request");
        self.inner.get(isbn.clone()).await.map_err(Self::map_error)
    }

    /// Every book, in the order it was added.
    #[instrument(skip(self), fields(library = %self.name))]
    pub async fn books(&self) -> Result<Vec<Book>, LibraryError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    /// The library name followed by one line per book, in catalog order.
    pub async fn summary(&self) -> Result<String, LibraryError> {
        let books = self.books().await?;
        Ok(render_summary(&self.name, &books))
    }

    #[instrument(skip(self), fields(library = %self.name))]
    pub(crate) async fn add_book(&self, book: BookCreate) -> Result<Isbn, LibraryError> {
        debug!("Sending request");
        let isbn = self.inner.create(book).await.map_err(Self::map_error)?;
        info!(%isbn, "Book added");
        Ok(isbn)
    }

    #[instrument(skip(self), fields(library = %self.name))]
    pub(crate) async fn remove_book(&self, isbn: &Isbn) -> Result<(), LibraryError> {
        debug!("Sending request");
        self.inner.delete(isbn.clone()).await.map_err(Self::map_error)?;
        info!(%isbn, "Book removed");
        Ok(())
    }

    #[instrument(skip(self), fields(library = %self.name))]
    pub(crate) async fn update_book(
        &self,
        isbn: &Isbn,
        update: BookUpdate,
    ) -> Result<Book, LibraryError> {
        debug!("Sending request");
        self.inner
            .update(isbn.clone(), update)
            .await
            .map_err(Self::map_error)
    }

    /// Lends one copy. Returns the copies left on the shelf.
    #[instrument(skip(self), fields(library = %self.name))]
    pub async fn borrow_copy(&self, isbn: &Isbn) -> Result<u32, LibraryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(isbn.clone(), BookAction::Borrow)
            .await
            .map_err(Self::map_error)?
        {
            BookActionResult::Borrow(left) => Ok(left),
            other => unreachable!("Borrow action must return Borrow result, got {:?}", other),
        }
    }

    /// Takes one copy back, whoever borrowed it. Returns the copies on the shelf.
    #[instrument(skip(self), fields(library = %self.name))]
    pub async fn return_copy(&self, isbn: &Isbn) -> Result<u32, LibraryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(isbn.clone(), BookAction::Return)
            .await
            .map_err(Self::map_error)?
        {
            BookActionResult::Return(on_shelf) => Ok(on_shelf),
            other => unreachable!("Return action must return Return result, got {:?}", other),
        }
    }

    /// Copies of a book currently on the shelf.
    #[instrument(skip(self), fields(library = %self.name))]
    pub async fn available(&self, isbn: &Isbn) -> Result<u32, LibraryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(isbn.clone(), BookAction::CheckAvailability)
            .await
            .map_err(Self::map_error)?
        {
            BookActionResult::CheckAvailability(count) => Ok(count),
            other => unreachable!(
                "CheckAvailability action must return CheckAvailability result, got {:?}",
                other
            ),
        }
    }
}

fn render_summary(name: &str, books: &[Book]) -> String {
    let mut lines = Vec::with_capacity(books.len() + 1);
    lines.push(name.to_string());
    lines.extend(books.iter().map(Book::to_string));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_framework::mock::MockClient;

    fn book(isbn: &str, title: &str, author: &str, copies: u32) -> Book {
        Book::new(Isbn::from(isbn), title, author, copies)
    }

    #[test]
    fn summary_of_empty_library_is_its_name() {
        assert_eq!(render_summary("Branch", &[]), "Branch");
    }

    #[tokio::test]
    async fn summary_lists_books_in_catalog_order() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_list().return_ok(vec![
            book("978-1", "Python 101", "Jake", 2),
            book("978-2", "Clean Code", "Robert", 1),
        ]);
        let library = LibraryClient::new("Central Library", mock.client());

        let summary = library.summary().await.unwrap();
        assert_eq!(
            summary,
            "Central Library\n\
             Python 101 by Jake (ISBN: 978-1) - Available: 2\n\
             Clean Code by Robert (ISBN: 978-2) - Available: 1"
        );
        mock.verify();
    }

    #[tokio::test]
    async fn framework_errors_map_to_library_errors() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_action(Isbn::from("978-9"))
            .return_err(FrameworkError::NotFound("978-9".into()));
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("978-1".into()));
        mock.expect_action(Isbn::from("978-1"))
            .return_err(FrameworkError::EntityError(Box::new(BookError::NoCopiesAvailable(
                Isbn::from("978-1"),
            ))));
        mock.expect_action(Isbn::from("978-1"))
            .return_err(FrameworkError::ActorClosed);
        let library = LibraryClient::new("Central Library", mock.client());

        assert_eq!(
            library.borrow_copy(&Isbn::from("978-9")).await,
            Err(LibraryError::BookNotFound(Isbn::from("978-9")))
        );
        assert_eq!(
            library.add_book(BookCreate::new("978-1", "Dup", "Dup", 1)).await,
            Err(LibraryError::DuplicateIsbn(Isbn::from("978-1")))
        );
        assert_eq!(
            library.borrow_copy(&Isbn::from("978-1")).await,
            Err(LibraryError::NoCopiesAvailable(Isbn::from("978-1")))
        );
        assert!(matches!(
            library.return_copy(&Isbn::from("978-1")).await,
            Err(LibraryError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[test]
    fn debug_shows_library_name() {
        let (client, _rx) = catalog_framework::mock::create_mock_client::<Book>(1);
        let library = LibraryClient::new("Central Library", client);
        assert_eq!(format!("{:?}", library), "\"Central Library\"");
    }
}
