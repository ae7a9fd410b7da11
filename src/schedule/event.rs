use super::ScheduleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of the track an event belongs to.
///
/// Parsing never fails, anything that is not one of the known kinds is kept
/// verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackType {
    Devroom,
    Maintrack,
    Standtrack,
    Other(String),
}

impl TrackType {
    pub fn as_str(&self) -> &str {
        match self {
            TrackType::Devroom => "devroom",
            TrackType::Maintrack => "maintrack",
            TrackType::Standtrack => "standtrack",
            TrackType::Other(s) => s,
        }
    }
}

impl From<&str> for TrackType {
    fn from(s: &str) -> Self {
        match s {
            "devroom" => TrackType::Devroom,
            "maintrack" => TrackType::Maintrack,
            "standtrack" => TrackType::Standtrack,
            other => TrackType::Other(other.to_owned()),
        }
    }
}

impl From<String> for TrackType {
    fn from(s: String) -> Self {
        TrackType::from(s.as_str())
    }
}

impl From<TrackType> for String {
    fn from(track_type: TrackType) -> Self {
        match track_type {
            TrackType::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single schedule entry, with the room code already normalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub event_id: i64,
    pub slug: String,
    pub name: String,
    pub track: String,
    #[serde(rename = "type")]
    pub track_type: TrackType,
    pub room: String,
}

impl EventRecord {
    /// Builds a record from the raw schedule room code, dropping its
    /// leading classification character (m/s/d/k).
    pub fn new(
        event_id: i64,
        slug: impl Into<String>,
        name: impl Into<String>,
        track: impl Into<String>,
        track_type: impl Into<TrackType>,
        raw_room: &str,
    ) -> Result<EventRecord, ScheduleError> {
        let slug = slug.into();
        let room = match strip_room_prefix(raw_room) {
            Some(room) => room.to_owned(),
            None => return Err(ScheduleError::EmptyRoom { slug }),
        };
        Ok(EventRecord {
            event_id,
            slug,
            name: name.into(),
            track: track.into(),
            track_type: track_type.into(),
            room,
        })
    }
}

/// Event entry as it appears in the pentabarf export.
#[derive(Clone, Debug, Deserialize)]
pub struct PentabarfEvent {
    pub event_id: i64,
    pub title: String,
    pub slug: String,
    pub track_name: String,
    #[serde(rename = "type")]
    pub track_type: String,
    pub room: String,
}

impl PentabarfEvent {
    pub fn into_record(self) -> Result<EventRecord, ScheduleError> {
        EventRecord::new(
            self.event_id,
            self.slug,
            self.title,
            self.track_name,
            self.track_type,
            &self.room,
        )
    }
}

/// Returns `None` for an empty room code.
fn strip_room_prefix(raw_room: &str) -> Option<&str> {
    let mut chars = raw_room.chars();
    chars.next()?;
    Some(chars.as_str())
}
