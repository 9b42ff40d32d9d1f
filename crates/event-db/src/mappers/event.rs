//! Event entity <-> model mapper

use event_core::entities::{Attendee, Event};
use event_core::value_objects::EventId;

use crate::models::{AttendeeModel, EventModel};

impl From<AttendeeModel> for Attendee {
    fn from(model: AttendeeModel) -> Self {
        Attendee {
            attendee_id: model.attendee_id,
            attendee_username: model.attendee_username,
        }
    }
}

/// Combine an event row with its attendee rows into an Event entity
///
/// Attendee rows are expected in join order, oldest first.
pub fn event_with_attendees(model: EventModel, attendees: Vec<AttendeeModel>) -> Event {
    Event {
        id: EventId::new(model.id),
        event_name: model.event_name,
        description: model.description,
        date: model.event_date,
        image_url: model.image_url,
        creator_id: model.creator_id,
        attendees: attendees.into_iter().map(Attendee::from).collect(),
        created_at: model.created_at,
    }
}
