//! User activity service
//!
//! Aggregates a user's footprint across the catalog: events they created
//! and events they attend.

use tracing::instrument;

use crate::dto::{EventResponse, EventsByUserRequest, EventsByUserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User activity service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Collect the events a user created and the events they attend.
    ///
    /// The two lists are independent: an event the user both created and
    /// attends appears in both, and neither list is deduplicated against
    /// the other. Unknown ids yield two empty lists.
    #[instrument(skip(self, request), fields(user_id = %request.id))]
    pub async fn events_for_user(
        &self,
        request: EventsByUserRequest,
    ) -> ServiceResult<EventsByUserResponse> {
        let created = self.ctx.event_repo().find_by_creator(&request.id).await?;
        let attended = self.ctx.event_repo().find_by_attendee(&request.id).await?;

        Ok(EventsByUserResponse {
            attended: attended.iter().map(EventResponse::from).collect(),
            created: created.iter().map(EventResponse::from).collect(),
        })
    }
}
