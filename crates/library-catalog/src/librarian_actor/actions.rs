//! Custom actions for the Librarian actor: catalog maintenance on the
//! library named in each request. Librarians never borrow or return.

use crate::clients::LibraryClient;
use crate::model::{Book, BookCreate, BookUpdate, Isbn};

#[derive(Debug, Clone)]
pub enum LibrarianAction {
    /// Add a new book. Fails with `DuplicateIsbn` if the ISBN is taken.
    AddBook { library: LibraryClient, book: BookCreate },
    /// Remove a book. Fails with `BookNotFound` if it is not in the catalog.
    RemoveBook { library: LibraryClient, isbn: Isbn },
    /// Correct a book's title or author.
    UpdateBook {
        library: LibraryClient,
        isbn: Isbn,
        update: BookUpdate,
    },
}

/// Results from LibrarianActions - variants match 1:1 with LibrarianAction.
#[derive(Debug, Clone, PartialEq)]
pub enum LibrarianActionResult {
    AddBook(Isbn),
    RemoveBook(Isbn),
    UpdateBook(Book),
}
