//! # Library Catalog Demo
//!
//! Replays a short day at the library:
//! 1. A librarian stocks the catalog.
//! 2. Two members register and borrow, one until the shelf runs dry.
//! 3. A book is returned.
//! 4. Another book is withdrawn from the catalog.
//!
//! The library summary is printed after each phase. Set `RUST_LOG=debug` to
//! see every request.

use catalog_framework::tracing::setup_tracing;
use library_catalog::lifecycle::{LibraryConfig, LibrarySystem};
use library_catalog::model::{BookCreate, Isbn, LibrarianCreate, MemberCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting library demo");

    let system = LibrarySystem::new(LibraryConfig::default());
    let library = &system.library;
    let python = Isbn::from("978-1");
    let clean_code = Isbn::from("978-2");

    let anita = async {
        let anita = system
            .librarians
            .register_librarian(LibrarianCreate::new("L1", "Anita"))
            .await
            .map_err(|e| e.to_string())?;
        for book in [
            BookCreate::new("978-1", "Python 101", "Jake", 2),
            BookCreate::new("978-2", "Clean Code", "Robert", 1),
        ] {
            system
                .librarians
                .add_book(&anita, library, book)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(anita)
    }
    .instrument(tracing::info_span!("stocking"))
    .await?;
    print_summary(&system).await?;

    let (alice, bob) = async {
        let alice = system
            .members
            .register_member(MemberCreate::new("M1", "Alice"))
            .await
            .map_err(|e| e.to_string())?;
        let bob = system
            .members
            .register_member(MemberCreate::new("M2", "Bob").with_max_books(2))
            .await
            .map_err(|e| e.to_string())?;

        system
            .members
            .borrow_book(&alice, library, &python)
            .await
            .map_err(|e| e.to_string())?;
        system
            .members
            .borrow_book(&bob, library, &python)
            .await
            .map_err(|e| e.to_string())?;
        match system.members.borrow_book(&bob, library, &python).await {
            Ok(()) => info!(member = %bob, "Second copy borrowed"),
            Err(e) => error!(member = %bob, error = %e, "Borrow failed"),
        }
        Ok::<_, String>((alice, bob))
    }
    .instrument(tracing::info_span!("lending"))
    .await?;
    print_summary(&system).await?;

    system
        .members
        .return_book(&alice, library, &python)
        .instrument(tracing::info_span!("returns"))
        .await
        .map_err(|e| e.to_string())?;
    print_summary(&system).await?;

    system
        .librarians
        .remove_book(&anita, library, &clean_code)
        .instrument(tracing::info_span!("withdrawal"))
        .await
        .map_err(|e| e.to_string())?;
    print_summary(&system).await?;

    for user in [
        system.librarians.info(&anita).await.map_err(|e| e.to_string())?,
        system.members.info(&alice).await.map_err(|e| e.to_string())?,
        system.members.info(&bob).await.map_err(|e| e.to_string())?,
    ] {
        println!("{}", user);
    }

    system.shutdown().await?;

    info!("Library demo completed successfully");
    Ok(())
}

async fn print_summary(system: &LibrarySystem) -> Result<(), String> {
    let summary = system.library.summary().await.map_err(|e| e.to_string())?;
    println!("{}\n", summary);
    Ok(())
}
