//! Drag-and-drop relocation of an event onto another day.
//!
//! A [`DragSession`] holds at most one [`DragContext`]. Dropping commits the
//! move through [`EventStore::move_to_date`] and always ends the drag.

use thiserror::Error;

use crate::models::event::Event;
use crate::services::event::{EventStore, EventStoreError};
use crate::utils::date::WallClock;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("No drag in progress")]
    NoActiveDrag,
    #[error("Event {0} is in the past and cannot be moved")]
    PastEvent(i64),
    #[error(transparent)]
    Store(#[from] EventStoreError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragContext {
    pub event_id: i64,
    pub original_date: String,
    pub hovered_date: Option<String>,
}

impl DragContext {
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: event.id,
            original_date: event.date.clone(),
            hovered_date: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct DragSession {
    active: Option<DragContext>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&DragContext> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Pick up `event`. Events on a day before `today` stay put.
    ///
    /// Starting a new drag replaces any drag already in progress.
    pub fn begin(&mut self, event: &Event, today: &WallClock) -> Result<(), DragError> {
        if event.is_past(today) {
            log::warn!("Refusing to drag past event {} on {}", event.id, event.date);
            return Err(DragError::PastEvent(event.id));
        }

        self.active = Some(DragContext::from_event(event));
        Ok(())
    }

    /// Record the day currently under the pointer.
    pub fn hover(&mut self, date: impl Into<String>) {
        if let Some(state) = self.active.as_mut() {
            state.hovered_date = Some(date.into());
        }
    }

    /// Finish the drag on `date`.
    ///
    /// Returns the moved event, or `Ok(None)` when dropped back on its own
    /// day. The session is cleared whatever the outcome.
    pub fn drop_on(
        &mut self,
        store: &mut EventStore,
        date: &str,
    ) -> Result<Option<Event>, DragError> {
        let context = self.active.take().ok_or(DragError::NoActiveDrag)?;
        Ok(store.move_to_date(context.event_id, date)?)
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}
