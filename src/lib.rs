//! Event Room Table Library
//!
//! Maps every event of the conference schedule to its Matrix rooms and renders
//! the resulting lookup table.

pub mod config;
pub mod render;
pub mod rooms;
pub mod schedule;
pub mod table;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FileConfig};
pub use render::{RenderError, TemplateRenderer};
pub use rooms::{resolve, resolve_all, ResolvedEvent, RoomAlias};
pub use schedule::{load_events, EventRecord, ScheduleError, TrackType};
pub use table::{generate_event_table, EventTableSummary};
