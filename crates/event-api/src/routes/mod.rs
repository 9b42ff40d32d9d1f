//! Route definitions
//!
//! The paths reproduce the legacy frontend's contract verbatim: flat,
//! unversioned, and mostly POST.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{activity, attendees, auth, events, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(identity_routes())
        .merge(event_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Identity routes
fn identity_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
}

/// Event catalog, attendance, and activity routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/createevent", post(events::create_event))
        .route("/sendevents", get(events::list_events))
        .route("/events", post(events::get_event))
        .route("/addattendee", post(attendees::add_attendee))
        .route("/eventsbyuser", post(activity::events_by_user))
}
