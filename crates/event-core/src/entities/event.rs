//! Event entity - an organized occurrence with a mutable attendee set

use chrono::{DateTime, Utc};

use crate::value_objects::EventId;

/// A registration recorded against an event
///
/// The identifier is the caller-supplied user id as a string; the domain
/// correlates it with users but enforces no referential integrity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub attendee_id: String,
    pub attendee_username: String,
}

impl Attendee {
    /// Create a new attendee entry
    pub fn new(attendee_id: impl Into<String>, attendee_username: impl Into<String>) -> Self {
        Self {
            attendee_id: attendee_id.into(),
            attendee_username: attendee_username.into(),
        }
    }
}

/// Event entity
///
/// Invariant: `attendees` holds at most one entry per distinct attendee id,
/// compared by exact string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub event_name: String,
    pub description: String,
    /// Caller-supplied date string; not validated as a calendar date
    pub date: String,
    pub image_url: String,
    /// Caller-supplied creator reference; orphaned values are tolerated
    pub creator_id: String,
    /// Ordered by join time, oldest first
    pub attendees: Vec<Attendee>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Check whether the given attendee id is already registered
    #[inline]
    pub fn has_attendee(&self, attendee_id: &str) -> bool {
        self.attendees.iter().any(|a| a.attendee_id == attendee_id)
    }

    /// Check whether the event was created by the given user id
    #[inline]
    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.creator_id == user_id
    }

    /// Number of registered attendees
    #[inline]
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }
}

/// Fields for a not-yet-persisted event
///
/// The store assigns the identifier and timestamp; the created event always
/// starts with an empty attendee set.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_name: String,
    pub description: String,
    pub date: String,
    pub image_url: String,
    pub creator_id: String,
}
