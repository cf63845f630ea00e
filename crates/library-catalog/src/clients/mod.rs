//! Type-safe wrappers around [`ResourceClient`](catalog_framework::ResourceClient).

pub mod librarian_client;
pub mod library_client;
pub mod member_client;

pub use librarian_client::*;
pub use library_client::*;
pub use member_client::*;
