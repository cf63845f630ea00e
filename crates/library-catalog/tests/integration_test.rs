use catalog_framework::ActorClient;
use library_catalog::book_actor::LibraryError;
use library_catalog::lifecycle::{LibraryConfig, LibrarySystem};
use library_catalog::librarian_actor::LibrarianError;
use library_catalog::member_actor::MemberError;
use library_catalog::model::{BookCreate, BookUpdate, Isbn, LibrarianCreate, MemberCreate, UserId};

/// A system with librarian L1 and the two starter books already catalogued.
async fn stocked_system() -> (LibrarySystem, UserId) {
    let system = LibrarySystem::new(LibraryConfig::default());
    let anita = system
        .librarians
        .register_librarian(LibrarianCreate::new("L1", "Anita"))
        .await
        .expect("Failed to register librarian");
    system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-1", "Python 101", "Jake", 2))
        .await
        .expect("Failed to add 978-1");
    system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-2", "Clean Code", "Robert", 1))
        .await
        .expect("Failed to add 978-2");
    (system, anita)
}

/// Full walk through the day at the library with all real actors.
#[tokio::test]
async fn test_lending_scenario() {
    let (system, anita) = stocked_system().await;
    let python = Isbn::from("978-1");

    let alice = system
        .members
        .register_member(MemberCreate::new("M1", "Alice"))
        .await
        .expect("Failed to register Alice");
    let bob = system
        .members
        .register_member(MemberCreate::new("M2", "Bob").with_max_books(2))
        .await
        .expect("Failed to register Bob");

    system
        .members
        .borrow_book(&alice, &system.library, &python)
        .await
        .expect("Alice should get a copy");
    assert_eq!(system.library.available(&python).await.unwrap(), 1);

    system
        .members
        .borrow_book(&bob, &system.library, &python)
        .await
        .expect("Bob should get the last copy");
    assert_eq!(system.library.available(&python).await.unwrap(), 0);

    // Bob is under his limit but the shelf is empty
    let err = system
        .members
        .borrow_book(&bob, &system.library, &python)
        .await
        .unwrap_err();
    assert_eq!(err, MemberError::NoCopiesAvailable(python.clone()));
    assert_eq!(system.members.borrowed_books(&bob).await.unwrap(), vec![python.clone()]);

    system
        .members
        .return_book(&alice, &system.library, &python)
        .await
        .expect("Alice should be able to return");
    assert_eq!(system.library.available(&python).await.unwrap(), 1);
    assert!(system.members.borrowed_books(&alice).await.unwrap().is_empty());

    system
        .librarians
        .remove_book(&anita, &system.library, &Isbn::from("978-2"))
        .await
        .expect("Failed to remove 978-2");
    assert_eq!(system.library.find_book(&Isbn::from("978-2")).await.unwrap(), None);

    assert_eq!(
        system.library.summary().await.unwrap(),
        "Central Library\nPython 101 by Jake (ISBN: 978-1) - Available: 1"
    );

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_summary_keeps_catalog_order() {
    let (system, anita) = stocked_system().await;
    system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-0", "Rust in Action", "Tim", 3))
        .await
        .unwrap();

    assert_eq!(
        system.library.summary().await.unwrap(),
        "Central Library\n\
         Python 101 by Jake (ISBN: 978-1) - Available: 2\n\
         Clean Code by Robert (ISBN: 978-2) - Available: 1\n\
         Rust in Action by Tim (ISBN: 978-0) - Available: 3"
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_maintenance_errors() {
    let (system, anita) = stocked_system().await;

    let err = system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-1", "Python 102", "Jake", 5))
        .await
        .unwrap_err();
    assert_eq!(err, LibrarianError::Library(LibraryError::DuplicateIsbn(Isbn::from("978-1"))));

    // The original record is untouched
    let book = system.library.find_book(&Isbn::from("978-1")).await.unwrap().unwrap();
    assert_eq!(book.title, "Python 101");
    assert_eq!(book.available(), 2);

    // A book with no copies is catalogued, it just cannot be lent
    let empty = system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-3", "Empty", "Nobody", 0))
        .await
        .unwrap();
    assert_eq!(system.library.available(&empty).await.unwrap(), 0);
    let alice = system
        .members
        .register_member(MemberCreate::new("M1", "Alice"))
        .await
        .unwrap();
    assert_eq!(
        system.members.borrow_book(&alice, &system.library, &empty).await,
        Err(MemberError::NoCopiesAvailable(empty.clone()))
    );
    assert!(system.members.borrowed_books(&alice).await.unwrap().is_empty());

    let err = system
        .librarians
        .remove_book(&anita, &system.library, &Isbn::from("978-404"))
        .await
        .unwrap_err();
    assert_eq!(err, LibrarianError::Library(LibraryError::BookNotFound(Isbn::from("978-404"))));

    let update = BookUpdate {
        title: Some("Clean Code, 2nd ed.".into()),
        author: None,
    };
    let book = system
        .librarians
        .update_book(&anita, &system.library, &Isbn::from("978-2"), update)
        .await
        .unwrap();
    assert_eq!(book.title, "Clean Code, 2nd ed.");
    assert_eq!(book.author, "Robert");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_borrow_limit_is_never_exceeded() {
    let (system, anita) = stocked_system().await;
    system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-3", "Dune", "Frank", 4))
        .await
        .unwrap();
    let carol = system
        .members
        .register_member(MemberCreate::new("M3", "Carol").with_max_books(2))
        .await
        .unwrap();

    for isbn in ["978-1", "978-2"] {
        system
            .members
            .borrow_book(&carol, &system.library, &Isbn::from(isbn))
            .await
            .unwrap();
    }
    let err = system
        .members
        .borrow_book(&carol, &system.library, &Isbn::from("978-3"))
        .await
        .unwrap_err();

    assert_eq!(err, MemberError::BorrowLimitReached { limit: 2 });
    assert_eq!(system.members.borrowed_books(&carol).await.unwrap().len(), 2);
    assert_eq!(system.library.available(&Isbn::from("978-3")).await.unwrap(), 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_book_mutates_nothing() {
    let (system, _) = stocked_system().await;
    let alice = system
        .members
        .register_member(MemberCreate::new("M1", "Alice"))
        .await
        .unwrap();
    let before = system.library.summary().await.unwrap();

    let err = system
        .members
        .borrow_book(&alice, &system.library, &Isbn::from("978-404"))
        .await
        .unwrap_err();

    assert_eq!(err, MemberError::BookNotFound(Isbn::from("978-404")));
    assert!(system.members.borrowed_books(&alice).await.unwrap().is_empty());
    assert_eq!(system.library.summary().await.unwrap(), before);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_returns_through_library_and_member() {
    let (system, _) = stocked_system().await;
    let python = Isbn::from("978-1");
    let alice = system
        .members
        .register_member(MemberCreate::new("M1", "Alice"))
        .await
        .unwrap();
    let bob = system
        .members
        .register_member(MemberCreate::new("M2", "Bob"))
        .await
        .unwrap();

    system.members.borrow_book(&alice, &system.library, &python).await.unwrap();
    assert_eq!(system.library.available(&python).await.unwrap(), 1);

    // Bob never borrowed; the member path refuses him
    let err = system
        .members
        .return_book(&bob, &system.library, &python)
        .await
        .unwrap_err();
    assert_eq!(err, MemberError::NotBorrowed(python.clone()));
    assert_eq!(system.library.available(&python).await.unwrap(), 1);

    // The library itself takes a copy back from anyone
    assert_eq!(system.library.return_copy(&python).await.unwrap(), 2);
    assert_eq!(
        system.library.return_copy(&python).await,
        Err(LibraryError::AllCopiesReturned(python.clone()))
    );
    assert_eq!(system.library.available(&python).await.unwrap(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_borrows_never_over_lend() {
    let (system, anita) = stocked_system().await;
    let dune = Isbn::from("978-3");
    system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-3", "Dune", "Frank", 3))
        .await
        .unwrap();

    let mut ids = Vec::new();
    for n in 0..10 {
        let id = system
            .members
            .register_member(MemberCreate::new(format!("M{}", n), format!("Reader {}", n)))
            .await
            .unwrap();
        ids.push(id);
    }

    let mut tasks = Vec::new();
    for id in ids {
        let members = system.members.clone();
        let library = system.library.clone();
        let dune = dune.clone();
        tasks.push(tokio::spawn(async move {
            members.borrow_book(&id, &library, &dune).await
        }));
    }

    let mut lent = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => lent += 1,
            Err(e) => assert_eq!(e, MemberError::NoCopiesAvailable(dune.clone())),
        }
    }

    assert_eq!(lent, 3);
    assert_eq!(system.library.available(&dune).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_same_member_concurrent_borrows_respect_limit() {
    let (system, anita) = stocked_system().await;
    system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-3", "Dune", "Frank", 5))
        .await
        .unwrap();
    let dave = system
        .members
        .register_member(MemberCreate::new("M4", "Dave").with_max_books(1))
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let members = system.members.clone();
        let library = system.library.clone();
        let dave = dave.clone();
        tasks.push(tokio::spawn(async move {
            members.borrow_book(&dave, &library, &Isbn::from("978-3")).await
        }));
    }
    let mut ok = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            ok += 1;
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(system.members.borrowed_books(&dave).await.unwrap().len(), 1);
    assert_eq!(system.library.available(&Isbn::from("978-3")).await.unwrap(), 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_one_member_registry_serves_two_libraries() {
    let (system, anita) = stocked_system().await;
    let (branch_actor, branch_books) = library_catalog::book_actor::new(8);
    let branch_handle = tokio::spawn(branch_actor.run(()));
    let branch = library_catalog::clients::LibraryClient::new("East Branch", branch_books);

    system
        .librarians
        .add_book(&anita, &branch, BookCreate::new("978-1", "Python 101", "Jake", 1))
        .await
        .unwrap();
    let alice = system
        .members
        .register_member(MemberCreate::new("M1", "Alice"))
        .await
        .unwrap();

    system.members.borrow_book(&alice, &branch, &Isbn::from("978-1")).await.unwrap();

    assert_eq!(branch.available(&Isbn::from("978-1")).await.unwrap(), 0);
    assert_eq!(system.library.available(&Isbn::from("978-1")).await.unwrap(), 2);
    assert_eq!(branch.summary().await.unwrap().lines().next(), Some("East Branch"));

    drop(branch);
    branch_handle.await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_withdrawn_book_does_not_hold_a_loan_slot() {
    let (system, anita) = stocked_system().await;
    let python = Isbn::from("978-1");
    let erin = system
        .members
        .register_member(MemberCreate::new("M5", "Erin").with_max_books(1))
        .await
        .unwrap();

    system.members.borrow_book(&erin, &system.library, &python).await.unwrap();
    system
        .librarians
        .remove_book(&anita, &system.library, &python)
        .await
        .unwrap();

    assert_eq!(
        system.members.return_book(&erin, &system.library, &python).await,
        Err(MemberError::BookNotFound(python.clone()))
    );
    assert!(system.members.borrowed_books(&erin).await.unwrap().is_empty());

    // The freed slot can be used again
    system
        .members
        .borrow_book(&erin, &system.library, &Isbn::from("978-2"))
        .await
        .expect("Erin should be under her limit again");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_re_added_book_clears_stale_loan() {
    let (system, anita) = stocked_system().await;
    let clean_code = Isbn::from("978-2");
    let erin = system
        .members
        .register_member(MemberCreate::new("M5", "Erin").with_max_books(1))
        .await
        .unwrap();

    system.members.borrow_book(&erin, &system.library, &clean_code).await.unwrap();
    system
        .librarians
        .remove_book(&anita, &system.library, &clean_code)
        .await
        .unwrap();
    system
        .librarians
        .add_book(&anita, &system.library, BookCreate::new("978-2", "Clean Code", "Robert", 1))
        .await
        .unwrap();

    assert_eq!(
        system.members.return_book(&erin, &system.library, &clean_code).await,
        Err(MemberError::Library(LibraryError::AllCopiesReturned(clean_code.clone())))
    );
    assert!(system.members.borrowed_books(&erin).await.unwrap().is_empty());
    assert_eq!(system.library.available(&clean_code).await.unwrap(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_member_with_loans_cannot_be_deleted() {
    let (system, _) = stocked_system().await;
    let clean_code = Isbn::from("978-2");
    let alice = system
        .members
        .register_member(MemberCreate::new("M1", "Alice"))
        .await
        .unwrap();
    system.members.borrow_book(&alice, &system.library, &clean_code).await.unwrap();

    assert_eq!(system.members.delete(alice.clone()).await, Err(MemberError::HasLoans(1)));
    assert_eq!(system.members.borrowed_books(&alice).await.unwrap(), vec![clean_code.clone()]);
    assert_eq!(system.library.available(&clean_code).await.unwrap(), 0);

    system
        .members
        .return_book(&alice, &system.library, &clean_code)
        .await
        .unwrap();
    system.members.delete(alice.clone()).await.unwrap();
    assert_eq!(
        system.members.borrowed_books(&alice).await,
        Err(MemberError::NotFound(alice))
    );
    assert_eq!(system.library.available(&clean_code).await.unwrap(), 1);

    system.shutdown().await.unwrap();
}
