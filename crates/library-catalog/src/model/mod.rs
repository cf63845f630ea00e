//! Plain data types. Each record kind implements
//! [`ActorEntity`](catalog_framework::ActorEntity) in its actor module.

pub mod book;
pub mod librarian;
pub mod member;
pub mod user;

pub use book::*;
pub use librarian::*;
pub use member::*;
pub use user::*;
