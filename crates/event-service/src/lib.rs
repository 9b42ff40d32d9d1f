//! # event-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    ActivityService, AttendanceService, EventService, IdentityService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
