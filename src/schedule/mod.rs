mod event;
mod load;

pub use event::{EventRecord, PentabarfEvent, TrackType};
pub use load::{load_events, parse_schedule};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Failed to read schedule file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed schedule: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Schedule has no `events` mapping")]
    MissingEvents,

    #[error("Invalid event \"{slug}\": {reason}")]
    InvalidEvent { slug: String, reason: String },

    #[error("Event \"{slug}\" has an empty room code")]
    EmptyRoom { slug: String },
}
