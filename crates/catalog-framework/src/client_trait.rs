//! # ActorClient Trait
//!
//! Common surface for resource-specific clients: default `get`, `list` and
//! `delete` built on top of the wrapped [`ResourceClient`].
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use catalog_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Card { number: String }
/// #[derive(Debug)] struct CardCreate { number: String }
/// #[derive(Debug)] struct CardUpdate;
/// #[derive(Debug)] enum CardAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("card error: {0}")]
/// struct CardError(String);
///
/// impl From<String> for CardError {
///     fn from(s: String) -> Self { CardError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Card {
///     type Id = String; type Create = CardCreate; type Update = CardUpdate;
///     type Action = CardAction; type ActionResult = (); type Context = (); type Error = CardError;
///     fn key_of(params: &CardCreate) -> String { params.number.clone() }
///     fn from_create_params(id: String, _: CardCreate) -> Result<Self, Self::Error> {
///         Ok(Self { number: id })
///     }
///     async fn on_update(&mut self, _: CardUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: CardAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct CardClient {
///     inner: ResourceClient<Card>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Card> for CardClient {
///     type Error = CardError;
///
///     fn inner(&self) -> &ResourceClient<Card> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CardError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CardClient) {
///     // get(), list() and delete() come for free
///     let _ = client.get("C-1".to_string()).await;
///     let _ = client.list().await;
///     let _ = client.delete("C-1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by key.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
