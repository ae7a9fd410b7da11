//! Derives the chat rooms of an event from its track type and room.

use super::RoomAlias;
use crate::schedule::{EventRecord, TrackType};
use serde::Serialize;

/// Main track room that hosts the keynotes.
const KEYNOTE_ROOM: &str = "fosdem";

/// Per-talk backstage room, shared by speakers and the talk's host.
pub fn backstage(event: &EventRecord) -> RoomAlias {
    RoomAlias::new(format!("talk-{}", event.event_id))
}

/// Public room where the audience follows the event.
pub fn audience(event: &EventRecord) -> RoomAlias {
    let room = &event.room;
    let localpart = match (&event.track_type, room.as_str()) {
        (TrackType::Devroom, _) => format!("{room}-devroom"),
        (TrackType::Maintrack, KEYNOTE_ROOM) => format!("{room}-keynotes"),
        (TrackType::Standtrack, _) => format!("{room}-stand"),
        (TrackType::Maintrack, _) | (TrackType::Other(_), _) => room.clone(),
    };
    RoomAlias::new(localpart)
}

/// Crew-only room of the event's track. Stands have none.
pub fn audience_backstage(event: &EventRecord) -> Option<RoomAlias> {
    let room = &event.room;
    let localpart = match (&event.track_type, room.as_str()) {
        (TrackType::Devroom, _) => format!("{room}-backstage-devroom"),
        (TrackType::Maintrack, KEYNOTE_ROOM) => format!("{room}-backstage-keynotes"),
        (TrackType::Standtrack, _) => return None,
        (TrackType::Maintrack, _) | (TrackType::Other(_), _) => format!("{room}-backstage"),
    };
    Some(RoomAlias::new(localpart))
}

/// An event together with every room derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedEvent {
    #[serde(flatten)]
    pub event: EventRecord,
    pub backstage: RoomAlias,
    pub audience: RoomAlias,
    pub audience_backstage: Option<RoomAlias>,
}

pub fn resolve(event: EventRecord) -> ResolvedEvent {
    ResolvedEvent {
        backstage: backstage(&event),
        audience: audience(&event),
        audience_backstage: audience_backstage(&event),
        event,
    }
}

pub fn resolve_all<I>(events: I) -> Vec<ResolvedEvent>
where
    I: IntoIterator<Item = EventRecord>,
{
    events.into_iter().map(resolve).collect()
}
