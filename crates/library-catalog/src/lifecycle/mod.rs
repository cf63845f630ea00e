//! # System Lifecycle
//!
//! Starts, wires and stops the actors behind a library.
//!
//! ## The LibrarySystem Pattern
//!
//! [`LibrarySystem`] creates one actor per record kind and spawns each in its
//! own task:
//!
//! ```rust,ignore
//! let (book_actor, book_client) = book_actor::new(capacity);
//! let (member_actor, members) = member_actor::new(capacity, default_max_books);
//! let (librarian_actor, librarians) = librarian_actor::new(capacity);
//!
//! tokio::spawn(book_actor.run(()));
//! tokio::spawn(member_actor.run(()));
//! tokio::spawn(librarian_actor.run(()));
//! ```
//!
//! Every actor runs with `Context = ()`. The library a member borrows from or
//! a librarian edits travels inside the action itself:
//!
//! ```rust,ignore
//! members.borrow_book(&alice, &system.library, &isbn).await?;
//! librarians.remove_book(&anita, &system.library, &isbn).await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - [`LibrarySystem::shutdown`] joins every task
//!
//! A member action holds a clone of the [`LibraryClient`](crate::clients::LibraryClient)
//! only while it runs, so the dependency graph stays acyclic and each actor
//! stops once its own channel closes.
//!
//! ## Observability
//!
//! Call [`catalog_framework::tracing::setup_tracing`] once at startup.
//!
//! ```bash
//! RUST_LOG=info cargo run -p library-catalog
//! RUST_LOG=debug cargo run -p library-catalog
//! ```

pub mod library_system;

pub use library_system::*;
