use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Library card number of a member or staff id of a librarian.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a user is allowed to do with a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Member,
    Librarian,
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Member => f.write_str("Member"),
            Role::Librarian => f.write_str("Librarian"),
        }
    }
}

/// Identity shared by everyone who acts on a library.
///
/// Implemented by [`Member`](crate::model::Member) and
/// [`Librarian`](crate::model::Librarian); each supplies its own [`Role`].
pub trait User {
    fn id(&self) -> &UserId;

    fn name(&self) -> &str;

    fn role(&self) -> Role;

    /// One-line description, e.g. `Alice (ID: M1) - Member`.
    fn info(&self) -> String {
        format!("{} (ID: {}) - {}", self.name(), self.id(), self.role())
    }
}
