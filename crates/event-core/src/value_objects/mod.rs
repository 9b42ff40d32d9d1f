//! Value objects - typed identifiers shared across the domain

mod id;

pub use id::{EventId, ParseIdError, UserId};
