//! # Librarian Actor
//!
//! Holds library staff. Each catalog change goes through a librarian action
//! that names the library to change.
//!
//! - [`entity`] - [`ActorEntity`](catalog_framework::ActorEntity) implementation for [`Librarian`]
//! - [`error`] - [`LibrarianError`]
//! - [`actions`] - [`LibrarianAction`] and [`LibrarianActionResult`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::LibrarianClient;
use crate::model::Librarian;
use catalog_framework::ResourceActor;

/// Creates a new Librarian actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Librarian>, LibrarianClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, LibrarianClient::new(generic_client))
}
