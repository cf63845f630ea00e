use crate::model::{Role, User, UserId};
use serde::{Deserialize, Serialize};

/// Staff who maintain the catalog. Carries identity only.
#[derive(Debug, Clone, PartialEq)]
pub struct Librarian {
    pub id: UserId,
    pub name: String,
}

impl Librarian {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl User for Librarian {
    fn id(&self) -> &UserId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        Role::Librarian
    }
}

/// Payload for registering a librarian.
#[derive(Debug, Clone)]
pub struct LibrarianCreate {
    pub id: UserId,
    pub name: String,
}

impl LibrarianCreate {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrarianUpdate {
    pub name: Option<String>,
}
