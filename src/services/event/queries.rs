use serde::Serialize;

use super::{EventFilter, EventStore};
use crate::models::event::Event;
use crate::services::conflict::{detect_conflicts_in, detect_event_conflicts, ConflictGroup};
use crate::utils::date::{format_date, is_current_month, WallClock};

/// Number of events carrying one type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeCount {
    pub event_type: String,
    pub count: usize,
}

/// Header counters for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarStats {
    pub total_events: usize,
    pub filtered_events: usize,
    pub month_events: usize,
    pub conflict_groups: usize,
}

impl EventStore {
    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events whose date is the calendar day of `date`, in insertion order.
    pub fn events_for_date(&self, date: &WallClock) -> Vec<&Event> {
        get_events_for_date(&self.events, date)
    }

    /// Events matching a type filter; [`EventFilter::All`] keeps everything.
    pub fn filter_by_type(&self, filter: &EventFilter) -> Vec<&Event> {
        self.events.iter().filter(|event| filter.matches(event)).collect()
    }

    /// Distinct type tags with their counts, in order of first appearance.
    pub fn event_types(&self) -> Vec<EventTypeCount> {
        let mut counts: Vec<EventTypeCount> = Vec::new();

        for event in &self.events {
            match counts.iter_mut().find(|c| c.event_type == event.event_type) {
                Some(existing) => existing.count += 1,
                None => counts.push(EventTypeCount {
                    event_type: event.event_type.clone(),
                    count: 1,
                }),
            }
        }

        counts
    }

    /// Filtered events falling in `anchor`'s month.
    pub fn events_in_month(&self, anchor: &WallClock, filter: &EventFilter) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| filter.matches(event) && is_current_month(&event.day(), anchor))
            .collect()
    }

    /// Conflict groups over the whole collection.
    pub fn conflicts(&self) -> Vec<ConflictGroup<'_>> {
        detect_event_conflicts(&self.events)
    }

    /// The other members of the group containing `id`.
    ///
    /// Empty when the event is unknown or not part of any group.
    pub fn conflicting_with(&self, id: i64) -> Vec<&Event> {
        self.conflicts()
            .into_iter()
            .find(|group| group.contains(id))
            .map(|group| {
                group
                    .events()
                    .iter()
                    .copied()
                    .filter(|event| event.id != id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Groups among the filtered events that fall on `date`'s calendar day.
    pub fn day_conflicts(&self, date: &WallClock, filter: &EventFilter) -> Vec<ConflictGroup<'_>> {
        let day = format_date(date);
        let selection = self.filter_by_type(filter);

        detect_conflicts_in(&selection)
            .into_iter()
            .filter(|group| group.date() == day)
            .collect()
    }

    /// Counters for the header. The filter narrows the shown and month
    /// counts only; conflict groups are counted over the whole collection.
    pub fn stats(&self, anchor: &WallClock, filter: &EventFilter) -> CalendarStats {
        CalendarStats {
            total_events: self.events.len(),
            filtered_events: self.filter_by_type(filter).len(),
            month_events: self.events_in_month(anchor, filter).len(),
            conflict_groups: self.conflicts().len(),
        }
    }
}

/// Events whose `date` equals `date` formatted as `YYYY-MM-DD`.
///
/// An invalid `date` formats as the invalid marker and so matches nothing
/// that holds a real date.
pub fn get_events_for_date<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    date: &WallClock,
) -> Vec<&'a Event> {
    let day = format_date(date);
    events.into_iter().filter(|event| event.date == day).collect()
}

/// Order a day's events by start time. The sort is stable, so events that
/// start together keep their insertion order.
pub fn sort_by_start_time(events: &mut [&Event]) {
    events.sort_by(|a, b| a.start_time.cmp(&b.start_time));
}
