//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Attendee, Event, NewEvent, User};
use crate::error::DomainError;
use crate::value_objects::{EventId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email (exact, case-sensitive match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user and return it with its store-assigned identifier
    ///
    /// Fails with `DomainError::EmailAlreadyExists` if another record holds
    /// the same email; the unique index backs the check under concurrency.
    async fn create(&self, username: &str, email: &str, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID, attendees included
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;

    /// List every event in storage order
    async fn list_all(&self) -> RepoResult<Vec<Event>>;

    /// Persist a new event and return it with its store-assigned identifier
    /// and an empty attendee set
    async fn create(&self, event: &NewEvent) -> RepoResult<Event>;

    /// Atomically register an attendee if absent
    ///
    /// Must be a single conditional insert guarded by the store, so that
    /// concurrent calls for the same (event, attendee) pair cannot both
    /// succeed. Fails with `EventNotFound` for an unknown event and
    /// `AlreadyRegistered` for a duplicate registration.
    async fn add_attendee(&self, event_id: EventId, attendee: &Attendee) -> RepoResult<()>;

    /// Events whose creator reference equals the given id
    async fn find_by_creator(&self, creator_id: &str) -> RepoResult<Vec<Event>>;

    /// Events carrying an attendee entry with the given id
    async fn find_by_attendee(&self, attendee_id: &str) -> RepoResult<Vec<Event>>;
}
