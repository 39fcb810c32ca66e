//! User entity - authors of threads and replies

use crate::value_objects::{InstructorId, UserId};

/// Forum user
///
/// `is_instructor` is the flag stored on the user row. It is independent of
/// whether an [`Instructor`] record references the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub is_instructor: bool,
}

impl User {
    /// Create a new User
    pub fn new(id: UserId, name: String) -> Self {
        Self {
            id,
            name,
            is_instructor: false,
        }
    }
}

/// Instructor record attached to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub id: InstructorId,
    pub user_id: UserId,
}

impl Instructor {
    /// Create a new Instructor
    pub fn new(id: InstructorId, user_id: UserId) -> Self {
        Self { id, user_id }
    }

    /// Check if this record belongs to the given user
    #[inline]
    pub fn is_for(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}
