//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Field names follow the legacy frontend's JSON bodies, so
//! several of them rename on the wire (`eventName`, `eventId`).

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Identity Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 72, message = "Password must be 1-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request (text parts of the multipart form; the image
/// bytes travel alongside, not inside this struct)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[serde(rename = "eventName")]
    #[validate(length(min = 1, max = 200, message = "Event name must be 1-200 characters"))]
    pub event_name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,

    /// Caller-supplied date string, stored verbatim
    pub date: String,

    /// Creator's user id, stored as an opaque correlation string
    #[serde(rename = "id")]
    pub creator_id: String,
}

/// Single-event lookup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GetEventRequest {
    #[serde(rename = "eventId")]
    #[validate(length(min = 1, message = "Event id is required"))]
    pub event_id: String,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Register an attendee on an event
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddAttendeeRequest {
    #[serde(rename = "eventId")]
    #[validate(length(min = 1, message = "Event id is required"))]
    pub event_id: String,

    /// Attendee's user id
    #[validate(length(min = 1, message = "Attendee id is required"))]
    pub id: String,

    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,
}

// ============================================================================
// Activity Requests
// ============================================================================

/// Per-user activity lookup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventsByUserRequest {
    #[validate(length(min = 1, message = "User id is required"))]
    pub id: String,
}
