use crate::clients::LibraryClient;
use crate::librarian_actor::{LibrarianAction, LibrarianActionResult, LibrarianError};
use crate::model::{Book, BookCreate, BookUpdate, Isbn, Librarian, LibrarianCreate, User, UserId};
use async_trait::async_trait;
use catalog_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Librarian actor.
///
/// Every catalog change names the acting librarian and the library it applies to.
#[derive(Clone)]
pub struct LibrarianClient {
    inner: ResourceClient<Librarian>,
}

impl LibrarianClient {
    pub fn new(inner: ResourceClient<Librarian>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Librarian> for LibrarianClient {
    type Error = LibrarianError;

    fn inner(&self) -> &ResourceClient<Librarian> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => LibrarianError::NotFound(UserId(id)),
            FrameworkError::AlreadyExists(id) => LibrarianError::AlreadyExists(UserId(id)),
            other => other
                .into_entity_error::<LibrarianError>()
                .unwrap_or_else(|other| LibrarianError::ActorCommunicationError(other.to_string())),
        }
    }
}

impl LibrarianClient {
    #[instrument(skip(self))]
    pub async fn register_librarian(&self, params: LibrarianCreate) -> Result<UserId, LibrarianError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    async fn act(
        &self,
        librarian: &UserId,
        action: LibrarianAction,
    ) -> Result<LibrarianActionResult, LibrarianError> {
        debug!("Sending request");
        self.inner
            .perform_action(librarian.clone(), action)
            .await
            .map_err(Self::map_error)
    }

    /// Adds a book to `library`.
    #[instrument(skip(self))]
    pub async fn add_book(
        &self,
        librarian: &UserId,
        library: &LibraryClient,
        book: BookCreate,
    ) -> Result<Isbn, LibrarianError> {
        let action = LibrarianAction::AddBook {
            library: library.clone(),
            book,
        };
        match self.act(librarian, action).await? {
            LibrarianActionResult::AddBook(isbn) => Ok(isbn),
            other => unreachable!("AddBook action must return AddBook result, got {:?}", other),
        }
    }

    /// Removes a book from `library`, including any copies still on loan.
    #[instrument(skip(self))]
    pub async fn remove_book(
        &self,
        librarian: &UserId,
        library: &LibraryClient,
        isbn: &Isbn,
    ) -> Result<(), LibrarianError> {
        let action = LibrarianAction::RemoveBook {
            library: library.clone(),
            isbn: isbn.clone(),
        };
        match self.act(librarian, action).await? {
            LibrarianActionResult::RemoveBook(_) => Ok(()),
            other => unreachable!("RemoveBook action must return RemoveBook result, got {:?}", other),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_book(
        &self,
        librarian: &UserId,
        library: &LibraryClient,
        isbn: &Isbn,
        update: BookUpdate,
    ) -> Result<Book, LibrarianError> {
        let action = LibrarianAction::UpdateBook {
            library: library.clone(),
            isbn: isbn.clone(),
            update,
        };
        match self.act(librarian, action).await? {
            LibrarianActionResult::UpdateBook(book) => Ok(book),
            other => unreachable!("UpdateBook action must return UpdateBook result, got {:?}", other),
        }
    }

    pub async fn info(&self, librarian: &UserId) -> Result<String, LibrarianError> {
        self.get(librarian.clone())
            .await?
            .map(|l| l.info())
            .ok_or_else(|| LibrarianError::NotFound(librarian.clone()))
    }
}
