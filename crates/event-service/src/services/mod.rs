//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod activity;
pub mod attendance;
pub mod catalog;
pub mod context;
pub mod error;
pub mod identity;

#[cfg(test)]
pub(crate) mod mocks;

// Re-export all services for convenience
pub use activity::ActivityService;
pub use attendance::AttendanceService;
pub use catalog::EventService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use identity::IdentityService;
