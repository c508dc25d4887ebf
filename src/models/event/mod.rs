// Event module
// Calendar event model and the validated draft used to create one

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::event_type::{DEFAULT_EVENT_COLOR, DEFAULT_EVENT_TYPE};
use crate::utils::color::is_valid_hex_color;
use crate::utils::date::{get_event_duration, WallClock};

/// A titled, colored, typed activity on a single date.
///
/// Serialized as `{id, title, date, startTime, endTime, color, type,
/// description}`. `start_time < end_time` is checked when an event is
/// created through [`NewEvent`], not here, so out-of-band data may violate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub start_time: String,
    /// `HH:MM`, 24-hour
    pub end_time: String,
    /// `#RRGGBB`
    pub color: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub description: String,
}

impl Event {
    /// Start as a wall-clock value on the event's date.
    pub fn start(&self) -> WallClock {
        WallClock::parse(&format!("{} {}", self.date, self.start_time))
    }

    /// End as a wall-clock value on the event's date.
    pub fn end(&self) -> WallClock {
        WallClock::parse(&format!("{} {}", self.date, self.end_time))
    }

    /// The event's calendar day at midnight.
    pub fn day(&self) -> WallClock {
        WallClock::parse(&self.date)
    }

    /// Length in whole minutes, 0 for malformed or inverted times.
    pub fn duration_minutes(&self) -> i64 {
        get_event_duration(&self.start_time, &self.end_time)
    }

    /// Whether the event sits on a calendar day before `today`.
    pub fn is_past(&self, today: &WallClock) -> bool {
        self.day().is_past(today)
    }
}

/// Reasons a draft is refused before it joins the collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title is required")]
    EmptyTitle,
    #[error("Date is required")]
    EmptyDate,
    #[error("End time must be after start time")]
    InvalidTimeRange,
    #[error("Color must be in hex format (#RRGGBB), got {0:?}")]
    InvalidColor(String),
}

/// Unsaved event. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
    pub event_type: String,
    pub description: String,
}

impl NewEvent {
    /// Draft with the form defaults: 09:00–10:00, blue, `meeting`.
    ///
    /// # Examples
    /// ```
    /// use event_calendar::models::event::NewEvent;
    ///
    /// let draft = NewEvent::new("Sprint Review", "2024-06-14")
    ///     .times("15:00", "16:00")
    ///     .event_type("review");
    /// assert!(draft.validate().is_ok());
    /// ```
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            color: DEFAULT_EVENT_COLOR.to_string(),
            event_type: DEFAULT_EVENT_TYPE.to_string(),
            description: String::new(),
        }
    }

    /// Set the start and end times (`HH:MM`)
    pub fn times(mut self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self.end_time = end_time.into();
        self
    }

    /// Set the color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the category tag
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the draft.
    ///
    /// Times are compared as strings, which matches chronological order for
    /// zero-padded `HH:MM` values.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if self.date.is_empty() {
            return Err(EventValidationError::EmptyDate);
        }

        if self.start_time >= self.end_time {
            return Err(EventValidationError::InvalidTimeRange);
        }

        if !is_valid_hex_color(&self.color) {
            return Err(EventValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }

    pub(crate) fn into_event(self, id: i64) -> Event {
        Event {
            id,
            title: self.title.trim().to_string(),
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color,
            event_type: self.event_type,
            description: self.description.trim().to_string(),
        }
    }
}
