//! # event-core
//!
//! Domain layer containing entities, typed identifiers, repository traits,
//! and the asset gateway port. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Attendee, Event, NewEvent, User};
pub use error::DomainError;
pub use traits::{AssetGateway, EventRepository, RepoResult, UploadedAsset, UserRepository};
pub use value_objects::{EventId, ParseIdError, UserId};
