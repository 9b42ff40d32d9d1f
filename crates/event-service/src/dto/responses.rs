//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize`. Field names reproduce the
//! legacy frontend's contract: the event's own identifier travels as
//! `_id`, while the creator reference travels as `id`.

use serde::Serialize;

use event_core::entities::{Attendee, Event, User};

// ============================================================================
// Identity Responses
// ============================================================================

/// Successful signup response
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub id: String,
    pub username: String,
}

impl SignupResponse {
    pub fn new(user: &User) -> Self {
        Self {
            message: "User created successfully".to_string(),
            id: user.id.to_string(),
            username: user.username.clone(),
        }
    }
}

/// Successful login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub id: String,
    pub username: String,
}

impl LoginResponse {
    pub fn new(user: &User) -> Self {
        Self {
            message: "Login successful".to_string(),
            id: user.id.to_string(),
            username: user.username.clone(),
        }
    }
}

// ============================================================================
// Event Responses
// ============================================================================

/// An attendee entry as the frontend reads it
#[derive(Debug, Clone, Serialize)]
pub struct AttendeeResponse {
    pub username: String,
    pub id: String,
}

impl From<&Attendee> for AttendeeResponse {
    fn from(attendee: &Attendee) -> Self {
        Self {
            username: attendee.attendee_username.clone(),
            id: attendee.attendee_id.clone(),
        }
    }
}

/// A full event as the frontend reads it
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "eventName")]
    pub event_name: String,

    pub description: String,

    pub date: String,

    #[serde(rename = "imageUrl")]
    pub image_url: String,

    pub attendees: Vec<AttendeeResponse>,

    /// Creator reference, named `id` on the wire
    #[serde(rename = "id")]
    pub creator_id: String,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            event_name: event.event_name.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            image_url: event.image_url.clone(),
            attendees: event.attendees.iter().map(AttendeeResponse::from).collect(),
            creator_id: event.creator_id.clone(),
        }
    }
}

/// Successful event creation response
#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub message: String,
    pub event: EventResponse,
}

impl CreateEventResponse {
    pub fn new(event: &Event) -> Self {
        Self {
            message: "Event created successfully".to_string(),
            event: EventResponse::from(event),
        }
    }
}

// ============================================================================
// Activity Responses
// ============================================================================

/// Per-user activity: events attended and events created.
///
/// The legacy names are kept: `filteredEvents` is the attended list,
/// `eventbyuser` the created list.
#[derive(Debug, Serialize)]
pub struct EventsByUserResponse {
    #[serde(rename = "filteredEvents")]
    pub attended: Vec<EventResponse>,

    #[serde(rename = "eventbyuser")]
    pub created: Vec<EventResponse>,
}

// ============================================================================
// Common Responses
// ============================================================================

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response with dependency states
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" },
            database: if database_healthy { "up" } else { "down" },
        }
    }
}
