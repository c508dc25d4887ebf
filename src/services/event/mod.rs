//! In-memory event collection and its controller operations.
//! Mutations live in `crud`, read-only views in `queries`.

use thiserror::Error;

use crate::models::event::{Event, EventValidationError};
use crate::models::settings::ALL_TYPES;

pub mod crud;
pub mod queries;

pub use queries::{get_events_for_date, sort_by_start_time, CalendarStats, EventTypeCount};

/// Sole owner of the event collection.
///
/// Stateless services (conflict detection, suggestions, grids) borrow the
/// collection through [`EventStore::events`] for a single computation.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
    /// Highest id ever present, so deleted ids are not handed out again.
    pub(crate) last_assigned_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventStoreError {
    #[error("Event {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Invalid(#[from] EventValidationError),
}

/// Which event types a view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    Type(String),
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Type(event_type) => &event.event_type == event_type,
        }
    }
}

impl From<&str> for EventFilter {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_TYPES {
            EventFilter::All
        } else {
            EventFilter::Type(value.to_string())
        }
    }
}

impl EventStore {
    /// Take ownership of an initial (seed) collection.
    pub fn new(events: Vec<Event>) -> Self {
        let last_assigned_id = events.iter().map(|e| e.id).max().unwrap_or(0).max(0);
        Self {
            events,
            last_assigned_id,
        }
    }

    /// Read-only view of the whole collection, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
