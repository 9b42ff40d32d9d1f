//! Event database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: Uuid,
    pub event_name: String,
    pub description: String,
    pub event_date: String,
    pub image_url: String,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for event_attendees table
///
/// One row per (event, attendee) pair, keyed by the composite primary key.
#[derive(Debug, Clone, FromRow)]
pub struct AttendeeModel {
    pub event_id: Uuid,
    pub attendee_id: String,
    pub attendee_username: String,
    pub joined_at: DateTime<Utc>,
}
