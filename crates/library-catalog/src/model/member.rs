use crate::model::{Isbn, Role, User, UserId};
use serde::{Deserialize, Serialize};

/// Books a member may hold at once when no limit is given.
pub const DEFAULT_MAX_BOOKS: u32 = 3;

/// A library member who borrows books.
///
/// # Actor Framework
/// Managed by the member [`ResourceActor`](catalog_framework::ResourceActor);
/// borrowing and returning are [`MemberAction`](crate::member_actor::MemberAction)s
/// so the limit check and the list update happen in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: UserId,
    pub name: String,
    pub max_books: u32,
    pub(crate) borrowed: Vec<Isbn>,
}

impl Member {
    pub fn new(id: UserId, name: impl Into<String>, max_books: u32) -> Self {
        Self {
            id,
            name: name.into(),
            max_books,
            borrowed: Vec::new(),
        }
    }

    /// Books currently on loan to this member, oldest first.
    pub fn borrowed(&self) -> &[Isbn] {
        &self.borrowed
    }

    pub fn at_limit(&self) -> bool {
        self.borrowed.len() >= self.max_books as usize
    }
}

impl User for Member {
    fn id(&self) -> &UserId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        Role::Member
    }
}

/// Payload for registering a member.
#[derive(Debug, Clone)]
pub struct MemberCreate {
    pub id: UserId,
    pub name: String,
    /// Falls back to the system default when `None`.
    pub max_books: Option<u32>,
}

impl MemberCreate {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_books: None,
        }
    }

    pub fn with_max_books(mut self, max_books: u32) -> Self {
        self.max_books = Some(max_books);
        self
    }
}

/// Payload for changing a member's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub max_books: Option<u32>,
}
