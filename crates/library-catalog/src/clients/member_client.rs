//! # Member Client
//!
//! High-level API for the Member actor: registration, borrowing, returning.
use crate::clients::LibraryClient;
use crate::member_actor::{MemberAction, MemberActionResult, MemberError};
use crate::model::{Isbn, Member, MemberCreate, MemberUpdate, User, UserId};
use async_trait::async_trait;
use catalog_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Member actor.
#[derive(Clone)]
pub struct MemberClient {
    inner: ResourceClient<Member>,
    default_max_books: u32,
}

impl MemberClient {
    pub fn new(inner: ResourceClient<Member>, default_max_books: u32) -> Self {
        Self {
            inner,
            default_max_books,
        }
    }
}

#[async_trait]
impl ActorClient<Member> for MemberClient {
    type Error = MemberError;

    fn inner(&self) -> &ResourceClient<Member> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MemberError::NotFound(UserId(id)),
            FrameworkError::AlreadyExists(id) => MemberError::AlreadyExists(UserId(id)),
            other => other
                .into_entity_error::<MemberError>()
                .unwrap_or_else(|other| MemberError::ActorCommunicationError(other.to_string())),
        }
    }
}

impl MemberClient {
    /// Registers a member. Without an explicit limit the client's default applies.
    #[instrument(skip(self))]
    pub async fn register_member(&self, mut params: MemberCreate) -> Result<UserId, MemberError> {
        debug!("Sending request");
        params.max_books.get_or_insert(self.default_max_books);
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Borrows one copy of `isbn` from `library` on the member's behalf.
    #[instrument(skip(self))]
    pub async fn borrow_book(
        &self,
        member: &UserId,
        library: &LibraryClient,
        isbn: &Isbn,
    ) -> Result<(), MemberError> {
        debug!("Sending request");
        let action = MemberAction::Borrow {
            library: library.clone(),
            isbn: isbn.clone(),
        };
        match self
            .inner
            .perform_action(member.clone(), action)
            .await
            .map_err(Self::map_error)?
        {
            MemberActionResult::Borrow(_) => Ok(()),
            other => unreachable!("Borrow action must return Borrow result, got {:?}", other),
        }
    }

    /// Returns one copy of `isbn` to `library`. Fails with
    /// [`MemberError::NotBorrowed`] unless the member holds it.
    #[instrument(skip(self))]
    pub async fn return_book(
        &self,
        member: &UserId,
        library: &LibraryClient,
        isbn: &Isbn,
    ) -> Result<(), MemberError> {
        debug!("Sending request");
        let action = MemberAction::Return {
            library: library.clone(),
            isbn: isbn.clone(),
        };
        match self
            .inner
            .perform_action(member.clone(), action)
            .await
            .map_err(Self::map_error)?
        {
            MemberActionResult::Return(_) => Ok(()),
            other => unreachable!("Return action must return Return result, got {:?}", other),
        }
    }

    async fn fetch(&self, member: &UserId) -> Result<Member, MemberError> {
        self.get(member.clone())
            .await?
            .ok_or_else(|| MemberError::NotFound(member.clone()))
    }

    /// ISBNs the member currently holds, oldest loan first.
    #[instrument(skip(self))]
    pub async fn borrowed_books(&self, member: &UserId) -> Result<Vec<Isbn>, MemberError> {
        Ok(self.fetch(member).await?.borrowed().to_vec())
    }

    /// `Alice (ID: M1) - Member`.
    pub async fn info(&self, member: &UserId) -> Result<String, MemberError> {
        Ok(self.fetch(member).await?.info())
    }

    #[instrument(skip(self))]
    pub async fn update_member(
        &self,
        member: &UserId,
        update: MemberUpdate,
    ) -> Result<Member, MemberError> {
        debug!("Sending request");
        self.inner
            .update(member.clone(), update)
            .await
            .map_err(Self::map_error)
    }
}
