//! # Library Catalog
//!
//! An in-memory library: a catalog of books with copy counts, members who
//! borrow within a limit, and librarians who maintain the catalog.
//!
//! - [`model`] - plain records ([`Book`](model::Book), [`Member`](model::Member), [`Librarian`](model::Librarian)) and the [`User`](model::User) trait
//! - [`book_actor`], [`member_actor`], [`librarian_actor`] - one resource actor per record kind
//! - [`clients`] - typed clients, including the [`LibraryClient`](clients::LibraryClient)
//! - [`lifecycle`] - [`LibrarySystem`](lifecycle::LibrarySystem) starts and stops everything

pub mod book_actor;
pub mod clients;
pub mod librarian_actor;
pub mod lifecycle;
pub mod member_actor;
pub mod model;
