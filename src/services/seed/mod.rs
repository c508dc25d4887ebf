//! Initial event data: the bundled JSON seed or a user-supplied file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::services::event::EventStore;

const BUNDLED_EVENTS: &str = include_str!("../../../data/events.json");

/// Events shipped with the binary.
pub fn bundled_events() -> Result<Vec<Event>> {
    serde_json::from_str(BUNDLED_EVENTS).context("Failed to parse bundled event seed")
}

/// A JSON array of events read from `path`.
pub fn load_events_from_path(path: &Path) -> Result<Vec<Event>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read event file: {:?}", path))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse event file: {:?}", path))?;

    log::info!("Loaded {} event(s) from {:?}", events.len(), path);
    Ok(events)
}

/// The configured seed file when it loads, otherwise the bundled seed.
pub fn load_seed(settings: &Settings) -> Result<Vec<Event>> {
    if let Some(path) = &settings.seed_file {
        match load_events_from_path(path) {
            Ok(events) => return Ok(events),
            Err(e) => log::warn!("{:#}, using bundled events", e),
        }
    }

    let events = bundled_events()?;
    log::info!("Loaded {} bundled event(s)", events.len());
    Ok(events)
}

impl EventStore {
    pub fn from_seed(settings: &Settings) -> Result<Self> {
        Ok(Self::new(load_seed(settings)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_seed_parses() {
        let events = bundled_events().unwrap();
        assert_eq!(events.len(), 12);
        assert!(events.iter().all(|e| e.start_time < e.end_time));
        assert_eq!(events[0].title, "Team Standup");
    }

    #[test]
    fn test_bundled_seed_has_conflicts() {
        let store = EventStore::new(bundled_events().unwrap());
        let groups: Vec<Vec<i64>> = store.conflicts().iter().map(|g| g.ids()).collect();
        assert_eq!(groups, vec![vec![1, 2], vec![4, 5], vec![9, 10]]);
    }

    #[test]
    fn test_seed_file_overrides_bundled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        fs::write(
            &path,
            r##"[{"id": 7, "title": "Offsite", "date": "2025-01-15", "startTime": "10:00",
                 "endTime": "16:00", "color": "#f59e0b", "type": "workshop"}]"##,
        )
        .unwrap();

        let settings = Settings {
            seed_file: Some(path),
            ..Settings::default()
        };
        let store = EventStore::from_seed(&settings).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(7).map(|e| e.description.as_str()), Some(""));
        assert_eq!(store.next_id(), 8);
    }

    #[test]
    fn test_unreadable_seed_file_falls_back() {
        let settings = Settings {
            seed_file: Some(PathBuf::from("/definitely/not/here/events.json")),
            ..Settings::default()
        };
        assert_eq!(load_seed(&settings).unwrap().len(), 12);
    }

    #[test]
    fn test_malformed_seed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_events_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse event file"));
    }
}
