//! Test fixtures and data generators
//!
//! Request bodies and response shapes matching the legacy wire contract.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            email: signup.email.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Signup response
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub id: String,
    pub username: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub id: String,
    pub username: String,
}

/// Single-event lookup request
#[derive(Debug, Serialize)]
pub struct GetEventRequest {
    #[serde(rename = "eventId")]
    pub event_id: String,
}

/// Attendee registration request
#[derive(Debug, Serialize)]
pub struct AddAttendeeRequest {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub id: String,
    pub username: String,
}

/// Per-user activity request
#[derive(Debug, Serialize)]
pub struct EventsByUserRequest {
    pub id: String,
}

/// An attendee entry on the wire
#[derive(Debug, Deserialize)]
pub struct AttendeeEntry {
    pub username: String,
    pub id: String,
}

/// An event on the wire: `_id` is the event's own identifier, `id` the
/// creator reference
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "eventName")]
    pub event_name: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub attendees: Vec<AttendeeEntry>,
    #[serde(rename = "id")]
    pub creator_id: String,
}

/// Event creation response
#[derive(Debug, Deserialize)]
pub struct CreateEventResponse {
    pub message: String,
    pub event: EventResponse,
}

/// Per-user activity response
#[derive(Debug, Deserialize)]
pub struct EventsByUserResponse {
    #[serde(rename = "filteredEvents")]
    pub attended: Vec<EventResponse>,
    #[serde(rename = "eventbyuser")]
    pub created: Vec<EventResponse>,
}

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
