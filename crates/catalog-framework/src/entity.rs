//! # ActorEntity Trait
//!
//! The contract every resource (Book, Member, Librarian, …) implements to be
//! managed by a [`ResourceActor`](crate::ResourceActor). It names the key,
//! the DTOs, the custom actions and the error type of a resource, and offers
//! lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! Resources in this framework carry their own natural key (an ISBN, a card
//! number). The key is read from the creation payload with
//! [`ActorEntity::key_of`], so the actor can refuse a second resource with the
//! same key before anything is constructed.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `async` so an entity can call other actors while handling a
/// request (a member borrowing from a library does exactly that). The
/// `Context` type is injected into every hook when the actor starts.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key for this entity (e.g. an ISBN newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `Borrow`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: every action of a
    /// resource returns the same error type, so callers match on a single enum.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the key the new entity will be stored under.
    fn key_of(params: &Self::Create) -> Self::Id;

    /// Construct the full Entity from its key and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
