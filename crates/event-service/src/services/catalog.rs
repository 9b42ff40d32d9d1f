//! Event catalog service
//!
//! Event creation (with image upload), catalog listing, and single-event
//! lookup.

use tracing::{info, instrument, warn};

use event_core::entities::NewEvent;
use event_core::value_objects::EventId;
use event_core::DomainError;

use crate::dto::{CreateEventRequest, CreateEventResponse, EventResponse, GetEventRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event catalog service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new event
    ///
    /// The image is uploaded through the asset gateway before anything is
    /// persisted; an event is only stored once a hosted URL exists. Empty
    /// image bytes fail validation without touching the gateway.
    #[instrument(skip(self, request, image_bytes), fields(event_name = %request.event_name, size = image_bytes.len()))]
    pub async fn create_event(
        &self,
        request: CreateEventRequest,
        image_bytes: Vec<u8>,
    ) -> ServiceResult<CreateEventResponse> {
        if image_bytes.is_empty() {
            return Err(ServiceError::Domain(DomainError::MissingImage));
        }

        let asset = self.ctx.asset_gateway().upload_image(image_bytes).await?;
        if asset.url.is_empty() {
            warn!("Upload returned an empty URL, refusing to persist");
            return Err(ServiceError::Domain(DomainError::UploadFailed(
                "upload returned an empty URL".to_string(),
            )));
        }

        let event = self
            .ctx
            .event_repo()
            .create(&NewEvent {
                event_name: request.event_name,
                description: request.description,
                date: request.date,
                image_url: asset.url,
                creator_id: request.creator_id,
            })
            .await?;

        info!(event_id = %event.id, "Event created successfully");

        Ok(CreateEventResponse::new(&event))
    }

    /// List the full event catalog in storage order
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().list_all().await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Look up a single event by its id
    ///
    /// A malformed id string is reported as not found, the same as an
    /// absent record.
    #[instrument(skip(self, request), fields(event_id = %request.event_id))]
    pub async fn get_event(&self, request: GetEventRequest) -> ServiceResult<EventResponse> {
        let event_id: EventId = request
            .event_id
            .parse()
            .map_err(|_| DomainError::MalformedEventId(request.event_id.clone()))?;

        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        Ok(EventResponse::from(&event))
    }
}
