//! Custom actions for the Book actor.
//!
//! Shelf operations on a single [`Book`](crate::model::Book): lending a copy,
//! taking one back, and reading the count.

/// Custom actions for Book entities.
#[derive(Debug, Clone)]
pub enum BookAction {
    /// Lends one copy.
    ///
    /// # Errors
    /// Fails with `NoCopiesAvailable` when every copy is out.
    Borrow,
    /// Takes one copy back.
    ///
    /// # Errors
    /// Fails with `AllCopiesReturned` when no copy is out.
    Return,
    /// Reads the number of copies on the shelf.
    CheckAvailability,
}

/// Results from BookActions - variants match 1:1 with BookAction.
/// Each carries the shelf count after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum BookActionResult {
    Borrow(u32),
    Return(u32),
    CheckAvailability(u32),
}
