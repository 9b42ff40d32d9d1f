//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use event_core::entities::{Attendee, Event, NewEvent};
use event_core::error::DomainError;
use event_core::traits::{EventRepository, RepoResult};
use event_core::value_objects::EventId;

use crate::mappers::event_with_attendees;
use crate::models::{AttendeeModel, EventModel};

use super::error::{map_conditional_insert, map_db_error};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load attendee rows for an event, in join order
    async fn load_attendees(&self, event_id: Uuid) -> Result<Vec<AttendeeModel>, DomainError> {
        let attendees = sqlx::query_as::<_, AttendeeModel>(
            r"
            SELECT event_id, attendee_id, attendee_username, joined_at
            FROM event_attendees
            WHERE event_id = $1
            ORDER BY joined_at, attendee_id
            ",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(attendees)
    }

    /// Attach attendees to a batch of event rows
    async fn hydrate(&self, models: Vec<EventModel>) -> RepoResult<Vec<Event>> {
        let mut events = Vec::with_capacity(models.len());
        for model in models {
            let attendees = self.load_attendees(model.id).await?;
            events.push(event_with_attendees(model, attendees));
        }
        Ok(events)
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, event_name, description, event_date, image_url, creator_id, created_at
            FROM events
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let attendees = self.load_attendees(model.id).await?;
                Ok(Some(event_with_attendees(model, attendees)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Event>> {
        let models = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, event_name, description, event_date, image_url, creator_id, created_at
            FROM events
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(models).await
    }

    #[instrument(skip(self, event))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let model = sqlx::query_as::<_, EventModel>(
            r"
            INSERT INTO events (event_name, description, event_date, image_url, creator_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, event_name, description, event_date, image_url, creator_id, created_at
            ",
        )
        .bind(&event.event_name)
        .bind(&event.description)
        .bind(&event.date)
        .bind(&event.image_url)
        .bind(&event.creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(event_with_attendees(model, Vec::new()))
    }

    #[instrument(skip(self))]
    async fn add_attendee(&self, event_id: EventId, attendee: &Attendee) -> RepoResult<()> {
        // Single conditional insert: the composite primary key rejects a
        // duplicate registration and the foreign key rejects an unknown
        // event, so concurrent calls cannot both pass a separate check.
        sqlx::query(
            r"
            INSERT INTO event_attendees (event_id, attendee_id, attendee_username)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(event_id.into_inner())
        .bind(&attendee.attendee_id)
        .bind(&attendee.attendee_username)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_conditional_insert(
                e,
                || DomainError::AlreadyRegistered,
                || DomainError::EventNotFound(event_id),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_creator(&self, creator_id: &str) -> RepoResult<Vec<Event>> {
        let models = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, event_name, description, event_date, image_url, creator_id, created_at
            FROM events
            WHERE creator_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(creator_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(models).await
    }

    #[instrument(skip(self))]
    async fn find_by_attendee(&self, attendee_id: &str) -> RepoResult<Vec<Event>> {
        let models = sqlx::query_as::<_, EventModel>(
            r"
            SELECT e.id, e.event_name, e.description, e.event_date, e.image_url,
                   e.creator_id, e.created_at
            FROM events e
            JOIN event_attendees a ON a.event_id = e.id
            WHERE a.attendee_id = $1
            ORDER BY e.created_at, e.id
            ",
        )
        .bind(attendee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(models).await
    }
}
