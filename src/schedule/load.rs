//! Schedule loading functionality

use super::{EventRecord, PentabarfEvent, ScheduleError};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads the schedule file and converts every entry of its `events` mapping
/// into an [`EventRecord`], in file order.
pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<EventRecord>, ScheduleError> {
    let path = path.as_ref();
    info!("Loading schedule from {}...", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_schedule(&text)?;

    info!("Schedule has {} events", events.len());
    Ok(events)
}

pub fn parse_schedule(text: &str) -> Result<Vec<EventRecord>, ScheduleError> {
    let root: Value = serde_yaml::from_str(text)?;
    let entries = root
        .get("events")
        .and_then(Value::as_mapping)
        .ok_or(ScheduleError::MissingEvents)?;
    parse_entries(entries)
}

fn parse_entries(entries: &Mapping) -> Result<Vec<EventRecord>, ScheduleError> {
    let mut out = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let key = key_to_slug(key);
        let raw: PentabarfEvent =
            serde_yaml::from_value(value.clone()).map_err(|err| ScheduleError::InvalidEvent {
                slug: key.clone(),
                reason: err.to_string(),
            })?;

        if raw.slug != key {
            warn!(
                "Schedule key \"{}\" differs from event slug \"{}\", using the event slug",
                key, raw.slug
            );
        }

        let event = raw.into_record()?;
        debug!(
            "Loaded event {} ({}) in room {}",
            event.event_id, event.slug, event.room
        );
        out.push(event);
    }
    Ok(out)
}

fn key_to_slug(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_owned())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::TrackType;
    use tempfile::TempDir;

    const SCHEDULE: &str = r#"
conference:
  title: FOSDEM
events:
  welcome:
    event_id: 2
    title: Welcome to FOSDEM
    slug: welcome
    track_name: Keynotes
    type: maintrack
    room: mjanson
    start_time: "09:30"
  foo:
    event_id: 101
    title: Foo Talk
    slug: foo
    track_name: Foo Devroom
    type: devroom
    room: dfoo
  expo_booth:
    event_id: 9
    title: Expo Booth
    slug: expo_booth
    track_name: Stands
    type: standtrack
    room: sexpo
"#;

    #[test]
    fn parses_events_in_file_order() {
        let events = parse_schedule(SCHEDULE).unwrap();

        let slugs: Vec<&str> = events.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["welcome", "foo", "expo_booth"]);

        assert_eq!(events[0].event_id, 2);
        assert_eq!(events[0].name, "Welcome to FOSDEM");
        assert_eq!(events[0].track, "Keynotes");
        assert_eq!(events[0].track_type, TrackType::Maintrack);
        assert_eq!(events[0].room, "janson");

        assert_eq!(events[1].room, "foo");
        assert_eq!(events[2].track_type, TrackType::Standtrack);
        assert_eq!(events[2].room, "expo");
    }

    #[test]
    fn entry_slug_wins_over_mapping_key() {
        let yaml = r#"
events:
  some-key:
    event_id: 1
    title: T
    slug: real-slug
    track_name: Tr
    type: devroom
    room: dx
"#;
        let events = parse_schedule(yaml).unwrap();
        assert_eq!(events[0].slug, "real-slug");
    }

    #[test]
    fn fails_without_events_mapping() {
        assert!(matches!(
            parse_schedule("conference: {}\n"),
            Err(ScheduleError::MissingEvents)
        ));
        assert!(matches!(
            parse_schedule("events: [1, 2]\n"),
            Err(ScheduleError::MissingEvents)
        ));
    }

    #[test]
    fn fails_on_malformed_yaml() {
        assert!(matches!(
            parse_schedule("events: {foo: [unclosed"),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn fails_on_incomplete_entry() {
        let yaml = r#"
events:
  broken:
    event_id: 3
    title: Broken
    slug: broken
"#;
        match parse_schedule(yaml) {
            Err(ScheduleError::InvalidEvent { slug, reason }) => {
                assert_eq!(slug, "broken");
                assert!(reason.contains("track_name"), "reason was: {}", reason);
            }
            other => panic!("Expected InvalidEvent, got {:?}", other),
        }
    }

    #[test]
    fn fails_on_empty_room() {
        let yaml = r#"
events:
  nowhere:
    event_id: 4
    title: Nowhere
    slug: nowhere
    track_name: Lost
    type: devroom
    room: ""
"#;
        assert!(matches!(
            parse_schedule(yaml),
            Err(ScheduleError::EmptyRoom { slug }) if slug == "nowhere"
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pentabarf.yaml");
        std::fs::write(&path, SCHEDULE).unwrap();

        let events = load_events(&path).unwrap();
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.yaml");

        match load_events(&path) {
            Err(ScheduleError::Io { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
