//! # Book Actor
//!
//! Holds the books of one library, keyed by ISBN and kept in the order they
//! were added. Shelf operations are custom actions:
//!
//! ```rust,ignore
//! let left = library.borrow_copy(&isbn).await?;   // BookAction::Borrow
//! let left = library.return_copy(&isbn).await?;   // BookAction::Return
//! ```
//!
//! Callers normally reach this actor through
//! [`LibraryClient`](crate::clients::LibraryClient), which carries the
//! library's name alongside the generic client.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](catalog_framework::ActorEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`]
//! - [`actions`] - [`BookAction`] and [`BookActionResult`]
//! - [`new()`] - factory for the actor and its client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Book;
use catalog_framework::{ResourceActor, ResourceClient};

/// Creates a new Book actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Book>, ResourceClient<Book>) {
    ResourceActor::new(buffer_size)
}
