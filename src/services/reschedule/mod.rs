//! Conflict-free reschedule proposals for a single event.
//!
//! The search walks the seven days after the event's current date and, on
//! each day, a fixed menu of start times. A candidate keeps the event's
//! duration and is accepted when no other event on that day overlaps it.

use serde::Serialize;

use crate::models::event::Event;
use crate::services::conflict::times_overlap;
use crate::utils::date::format::time_on_reference_day;
use crate::utils::date::{format_date, Step};

/// Start times tried on every candidate day, in order.
pub const CANDIDATE_START_TIMES: [&str; 6] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"];

/// Days searched after the event's current date.
pub const SEARCH_DAYS: i64 = 7;

/// The search stops once this many candidates are accepted.
pub const MAX_SUGGESTIONS: usize = 6;

/// A proposed slot. Nothing is changed until the caller reschedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// `HH:MM` plus `duration_minutes`, as a zero-padded `HH:MM` string.
///
/// The hour is not wrapped at midnight, so a late start with a long
/// duration yields an hour of 24 or more.
pub fn calculate_end_time(start_time: &str, duration_minutes: i64) -> Option<String> {
    let (hours, minutes) = start_time.split_once(':')?;
    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;

    let total = hours * 60 + minutes + duration_minutes;
    Some(format!("{:02}:{:02}", total.div_euclid(60), total.rem_euclid(60)))
}

/// Whether two `HH:MM` ranges overlap on the same day.
pub fn is_time_overlapping(start1: &str, end1: &str, start2: &str, end2: &str) -> bool {
    times_overlap(
        &time_on_reference_day(start1),
        &time_on_reference_day(end1),
        &time_on_reference_day(start2),
        &time_on_reference_day(end2),
    )
}

/// Events other than `event_id` that would clash with the proposed slot.
pub fn find_slot_conflicts<'a>(
    event_id: i64,
    date: &str,
    start_time: &str,
    end_time: &str,
    events: &'a [Event],
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|other| {
            other.id != event_id
                && other.date == date
                && is_time_overlapping(start_time, end_time, &other.start_time, &other.end_time)
        })
        .collect()
}

/// Up to [`MAX_SUGGESTIONS`] conflict-free slots for `event`.
///
/// Candidates are produced day by day (`+1` to `+7`), then by start time in
/// [`CANDIDATE_START_TIMES`] order, and are returned in that order. The event
/// itself (matched by id) is ignored when checking for overlaps. An event
/// whose date does not parse gets no suggestions.
pub fn generate_suggestions(event: &Event, all_events: &[Event]) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let current = event.day();
    if !current.is_valid() {
        log::debug!("No suggestions for event {}: unparseable date {:?}", event.id, event.date);
        return suggestions;
    }

    let duration = event.duration_minutes();

    'days: for offset in 1..=SEARCH_DAYS {
        let date = format_date(&current.add(offset, Step::Day));

        for start_time in CANDIDATE_START_TIMES {
            let Some(end_time) = calculate_end_time(start_time, duration) else {
                continue;
            };

            if find_slot_conflicts(event.id, &date, start_time, &end_time, all_events).is_empty() {
                suggestions.push(Suggestion {
                    date: date.clone(),
                    start_time: start_time.to_string(),
                    end_time,
                });
            }

            if suggestions.len() >= MAX_SUGGESTIONS {
                break 'days;
            }
        }
    }

    log::debug!(
        "Generated {} reschedule suggestion(s) for event {}",
        suggestions.len(),
        event.id
    );

    suggestions
}
