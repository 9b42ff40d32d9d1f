//! Attendance handlers

use axum::{extract::State, Json};
use event_service::dto::{AddAttendeeRequest, MessageResponse};
use event_service::AttendanceService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Register an attendee on an event
///
/// POST /addattendee
pub async fn add_attendee(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddAttendeeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.add_attendee(request).await?;
    Ok(Json(response))
}
