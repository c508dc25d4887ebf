use super::{EventStore, EventStoreError};
use crate::models::event::{Event, NewEvent};
use crate::utils::date::{format_date, WallClock};

impl EventStore {
    /// Validate a draft and append it with the next id.
    pub fn add(&mut self, draft: NewEvent) -> Result<Event, EventStoreError> {
        draft.validate()?;

        let id = self.next_id();
        let event = draft.into_event(id);
        self.last_assigned_id = id;
        self.events.push(event.clone());

        log::info!("Created event {} \"{}\" on {}", event.id, event.title, event.date);
        Ok(event)
    }

    /// Remove an event by id.
    pub fn delete(&mut self, id: i64) -> Result<Event, EventStoreError> {
        let index = self.position(id)?;
        let removed = self.events.remove(index);

        log::info!("Deleted event {} \"{}\"", removed.id, removed.title);
        Ok(removed)
    }

    /// Overwrite an event's date and times.
    ///
    /// No validation is performed: a confirmed reschedule may create a new
    /// conflict, which shows up the next time conflicts are detected.
    pub fn reschedule(
        &mut self,
        id: i64,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Result<Event, EventStoreError> {
        let index = self.position(id)?;
        let event = &mut self.events[index];
        event.date = date.into();
        event.start_time = start_time.into();
        event.end_time = end_time.into();

        log::info!(
            "Rescheduled event {} to {} {}-{}",
            event.id,
            event.date,
            event.start_time,
            event.end_time
        );
        Ok(event.clone())
    }

    /// Relocate an event to another day, keeping its times.
    ///
    /// Returns `Ok(None)` when `target_date` is the event's current calendar
    /// day, in which case nothing changes.
    pub fn move_to_date(
        &mut self,
        id: i64,
        target_date: &str,
    ) -> Result<Option<Event>, EventStoreError> {
        let index = self.position(id)?;
        let current = &self.events[index];

        let target_day = format_date(&WallClock::parse(target_date));
        let current_day = format_date(&current.day());
        if target_day == current_day {
            return Ok(None);
        }

        let (title, start_time, end_time) = (
            current.title.clone(),
            current.start_time.clone(),
            current.end_time.clone(),
        );
        let moved = self.reschedule(id, target_date, start_time, end_time)?;
        log::info!("Moved \"{}\" from {} to {}", title, current_day, target_day);
        Ok(Some(moved))
    }

    /// One above the highest id present now or ever assigned.
    pub fn next_id(&self) -> i64 {
        let current_max = self.events.iter().map(|e| e.id).max().unwrap_or(0);
        current_max.max(self.last_assigned_id).max(0) + 1
    }

    fn position(&self, id: i64) -> Result<usize, EventStoreError> {
        self.events
            .iter()
            .position(|event| event.id == id)
            .ok_or(EventStoreError::NotFound(id))
    }
}
