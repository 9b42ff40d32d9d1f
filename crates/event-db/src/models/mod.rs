//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;
mod user;

pub use event::{AttendeeModel, EventModel};
pub use user::UserModel;
