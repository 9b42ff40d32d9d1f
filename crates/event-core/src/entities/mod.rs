//! Domain entities

mod event;
mod user;

pub use event::{Attendee, Event, NewEvent};
pub use user::User;
