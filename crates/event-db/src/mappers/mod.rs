//! Entity ↔ model mappers

mod event;
mod user;

pub use event::event_with_attendees;
