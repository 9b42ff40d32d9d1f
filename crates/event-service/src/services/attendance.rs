//! Attendance service
//!
//! Idempotency-guarded attendee registration.

use tracing::{info, instrument};

use event_core::entities::Attendee;
use event_core::value_objects::EventId;
use event_core::DomainError;

use crate::dto::{AddAttendeeRequest, MessageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register an attendee on an event
    ///
    /// The store performs the add-if-absent in one conditional insert, so
    /// two concurrent calls for the same pair cannot both succeed.
    #[instrument(skip(self, request), fields(event_id = %request.event_id, attendee_id = %request.id))]
    pub async fn add_attendee(&self, request: AddAttendeeRequest) -> ServiceResult<MessageResponse> {
        let event_id: EventId = request
            .event_id
            .parse()
            .map_err(|_| DomainError::MalformedEventId(request.event_id.clone()))?;

        let attendee = Attendee::new(request.id, request.username);
        self.ctx.event_repo().add_attendee(event_id, &attendee).await?;

        info!(event_id = %event_id, "Attendee registered");

        Ok(MessageResponse::new("User added to event successfully"))
    }
}
