//! Event catalog handlers
//!
//! Event creation from a multipart form, catalog listing, and
//! single-event lookup.

use axum::extract::{Multipart, State};
use axum::Json;
use validator::Validate;

use event_service::dto::{
    CreateEventRequest, CreateEventResponse, EventResponse, GetEventRequest,
};
use event_service::EventService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Create a new event from a multipart form
///
/// POST /createevent
///
/// Expects an `image` file part plus `eventName`, `description`, `date`,
/// and `id` (creator) text parts.
pub async fn create_event(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<CreateEventResponse>> {
    let mut image_bytes: Option<Vec<u8>> = None;
    let mut event_name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut date: Option<String> = None;
    let mut creator_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_multipart(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "image" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_multipart(e.to_string()))?;
                image_bytes = Some(bytes.to_vec());
            }
            "eventName" => event_name = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "date" => date = Some(read_text(field).await?),
            "id" => creator_id = Some(read_text(field).await?),
            _ => {}
        }
    }

    let request = CreateEventRequest {
        event_name: event_name
            .ok_or_else(|| ApiError::invalid_multipart("missing eventName field"))?,
        description: description
            .ok_or_else(|| ApiError::invalid_multipart("missing description field"))?,
        date: date.ok_or_else(|| ApiError::invalid_multipart("missing date field"))?,
        creator_id: creator_id.ok_or_else(|| ApiError::invalid_multipart("missing id field"))?,
    };
    request.validate()?;

    let service = EventService::new(state.service_context());
    let response = service
        .create_event(request, image_bytes.unwrap_or_default())
        .await?;
    Ok(Json(response))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::invalid_multipart(e.to_string()))
}

/// List the full event catalog
///
/// GET /sendevents
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.list_events().await?;
    Ok(Json(response))
}

/// Look up a single event by id
///
/// POST /events
pub async fn get_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GetEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let response = service.get_event(request).await?;
    Ok(Json(response))
}
