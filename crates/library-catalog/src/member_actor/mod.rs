//! # Member Actor
//!
//! Holds registered members and their current loans. Borrowing and returning
//! are actions that call into whichever library the request names.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](catalog_framework::ActorEntity) implementation for [`Member`]
//! - [`error`] - [`MemberError`]
//! - [`actions`] - [`MemberAction`] and [`MemberActionResult`]
//! - [`new()`] - factory for the actor and its client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MemberClient;
use crate::model::Member;
use catalog_framework::ResourceActor;

/// Creates a new Member actor and its client.
///
/// Members registered without a limit get `default_max_books`.
pub fn new(buffer_size: usize, default_max_books: u32) -> (ResourceActor<Member>, MemberClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MemberClient::new(generic_client, default_max_books))
}
