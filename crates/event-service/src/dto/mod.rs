//! Data transfer objects for API requests and responses
//!
//! Request DTOs carry validation for API inputs; response DTOs serialize
//! outputs with the field names the legacy frontend expects.

pub mod requests;
pub mod responses;

pub use requests::{
    AddAttendeeRequest, CreateEventRequest, EventsByUserRequest, GetEventRequest, LoginRequest,
    SignupRequest,
};

pub use responses::{
    AttendeeResponse, CreateEventResponse, EventResponse, EventsByUserResponse, HealthResponse,
    LoginResponse, MessageResponse, ReadinessResponse, SignupResponse,
};
