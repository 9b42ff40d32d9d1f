//! User entity - an account that can create and attend events

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User account entity
///
/// The password credential is deliberately not part of the entity; the
/// repository stores and returns the Argon2 hash through dedicated methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: UserId, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            created_at: Utc::now(),
        }
    }
}
