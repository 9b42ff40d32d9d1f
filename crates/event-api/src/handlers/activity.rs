//! User activity handlers

use axum::{extract::State, Json};
use event_service::dto::{EventsByUserRequest, EventsByUserResponse};
use event_service::ActivityService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Collect the events a user created and the events they attend
///
/// POST /eventsbyuser
pub async fn events_by_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EventsByUserRequest>,
) -> ApiResult<Json<EventsByUserResponse>> {
    let service = ActivityService::new(state.service_context());
    let response = service.events_for_user(request).await?;
    Ok(Json(response))
}
