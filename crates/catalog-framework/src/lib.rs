//! # Catalog Framework
//!
//! Building blocks for keeping small collections of stateful records, each
//! owned by its own Tokio task and reached only by message passing. The
//! library catalog (books, members, librarians) is built on top of it.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its natural key, its
//!    payloads and its custom actions.
//! 2. **Runtime Layer** ([`ResourceActor`]) - an insertion-ordered keyed store
//!    plus the loop that serves requests against it, one at a time.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - cloneable,
//!    typed handles that turn method calls into requests.
//!
//! Business rules live in the entity (`handle_action`); the framework only
//! routes, stores and logs.
//!
//! ## Keys
//!
//! Records are stored under a key read from the creation payload
//! ([`ActorEntity::key_of`]). A second create with the same key is refused
//! with [`FrameworkError::AlreadyExists`] and the stored record is untouched.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests to one actor are processed **sequentially**: a check-then-update
//!   inside `handle_action` cannot interleave with another request.
//! - An entity may await *other* actors from its hooks (the context or the
//!   action payload carries their clients). It must never await its own actor.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(context)` rather than `new()`, so actors
//! can be created first and wired afterwards.
//!
//! ## Testing
//!
//! [`mock::MockClient`] produces a [`ResourceClient`] that answers from
//! scripted expectations, for testing code that talks to an actor without
//! running it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
