use crate::clients::{LibrarianClient, LibraryClient, MemberClient};
use crate::model::DEFAULT_MAX_BOOKS;
use tracing::{error, info};

/// Settings for one [`LibrarySystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Shown as the first line of the library summary.
    pub name: String,
    /// Channel capacity of each actor's mailbox.
    pub mailbox_capacity: usize,
    /// Limit given to members registered without one.
    pub default_max_books: u32,
}

impl LibraryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: "Central Library".to_string(),
            mailbox_capacity: 32,
            default_max_books: DEFAULT_MAX_BOOKS,
        }
    }
}

/// Runs the three actors behind one library and hands out their clients.
///
/// # Architecture
///
/// - **Book actor**: the catalog, reached through [`LibraryClient`]
/// - **Member actor**: registered members and their loans
/// - **Librarian actor**: staff who change the catalog
///
/// None of the actors holds another's client in its context. Member and
/// librarian actions carry the [`LibraryClient`] they act on, so one member
/// registry can serve several libraries.
///
/// # Example
///
/// ```ignore
/// let system = LibrarySystem::new(LibraryConfig::default());
/// let anita = system.librarians.register_librarian(LibrarianCreate::new("L1", "Anita")).await?;
/// system.librarians.add_book(&anita, &system.library, BookCreate::new("978-1", "Python 101", "Jake", 2)).await?;
/// println!("{}", system.library.summary().await?);
/// system.shutdown().await?;
/// ```
pub struct LibrarySystem {
    pub library: LibraryClient,
    pub members: MemberClient,
    pub librarians: LibrarianClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl LibrarySystem {
    /// Spawns the Book, Member and Librarian actors.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: LibraryConfig) -> Self {
        let (book_actor, book_client) = crate::book_actor::new(config.mailbox_capacity);
        let (member_actor, members) =
            crate::member_actor::new(config.mailbox_capacity, config.default_max_books);
        let (librarian_actor, librarians) = crate::librarian_actor::new(config.mailbox_capacity);

        let handles = vec![
            tokio::spawn(book_actor.run(())),
            tokio::spawn(member_actor.run(())),
            tokio::spawn(librarian_actor.run(())),
        ];
        info!(library = %config.name, "Library system started");

        Self {
            library: LibraryClient::new(config.name, book_client),
            members,
            librarians,
            handles,
        }
    }

    /// Drops the clients and waits for every actor to stop.
    ///
    /// Clones of the clients handed out earlier keep their actor alive, so
    /// they must be dropped first or this never completes.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!(library = self.library.name(), "Shutting down library system...");

        drop(self.librarians);
        drop(self.members);
        drop(self.library);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Library system shutdown complete.");
        Ok(())
    }
}
