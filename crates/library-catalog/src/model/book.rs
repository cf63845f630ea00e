use crate::book_actor::BookError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Catalog key of a book, usually an ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Isbn(pub String);

impl Isbn {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Isbn {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Isbn {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog entry and its shelf count.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](catalog_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](catalog_framework::ResourceActor).
///
/// See [`impl ActorEntity for Book`](#impl-ActorEntity-for-Book) for details on:
/// - Creation parameters ([`BookCreate`])
/// - Update parameters ([`BookUpdate`])
/// - Custom actions ([`BookAction`](crate::book_actor::BookAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    total_copies: u32,
    available_copies: u32,
}

impl Book {
    /// Creates a book with every copy on the shelf.
    pub fn new(isbn: Isbn, title: impl Into<String>, author: impl Into<String>, copies: u32) -> Self {
        Self {
            isbn,
            title: title.into(),
            author: author.into(),
            total_copies: copies,
            available_copies: copies,
        }
    }

    /// Takes one copy off the shelf.
    pub fn borrow(&mut self) -> Result<(), BookError> {
        if self.available_copies == 0 {
            return Err(BookError::NoCopiesAvailable(self.isbn.clone()));
        }
        self.available_copies -= 1;
        Ok(())
    }

    /// Puts one copy back.
    ///
    /// Fails with [`BookError::AllCopiesReturned`] when no copy is out, so
    /// the shelf count never exceeds the copies the book was created with.
    pub fn returned(&mut self) -> Result<(), BookError> {
        if self.available_copies >= self.total_copies {
            return Err(BookError::AllCopiesReturned(self.isbn.clone()));
        }
        self.available_copies += 1;
        Ok(())
    }

    pub fn available(&self) -> u32 {
        self.available_copies
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) - Available: {}",
            self.title, self.author, self.isbn, self.available_copies
        )
    }
}

/// Payload for adding a book to a library.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub copies: u32,
}

impl BookCreate {
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            copies,
        }
    }
}

/// Corrections to a book's bibliographic fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
}
