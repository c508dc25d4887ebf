//! Same-day time conflicts between events.
//!
//! Two intervals `[s1, e1)` and `[s2, e2)` overlap when one starts no later
//! than the other and ends after the other's start. Touching endpoints
//! (`e1 == s2`) are not a conflict.
//!
//! Grouping is seeded from one *anchor* event at a time: every later event
//! that overlaps the anchor joins its group, even when it does not overlap
//! the other members. A group `[A, B, C]` may therefore contain a pair
//! (`B`, `C`) that does not overlap itself.

use std::collections::HashSet;

use crate::models::event::Event;
use crate::utils::date::WallClock;

/// Two or more same-day events whose intervals overlap the first (anchor)
/// event's interval.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictGroup<'a> {
    events: Vec<&'a Event>,
}

impl<'a> ConflictGroup<'a> {
    /// The event the group was seeded from.
    pub fn anchor(&self) -> &'a Event {
        self.events[0]
    }

    /// Shared `YYYY-MM-DD` date of every member.
    pub fn date(&self) -> &'a str {
        &self.anchor().date
    }

    pub fn events(&self) -> &[&'a Event] {
        &self.events
    }

    pub fn ids(&self) -> Vec<i64> {
        self.events.iter().map(|event| event.id).collect()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.events.iter().any(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false; groups are only produced with two or more members.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Whether `[a_start, a_end)` and `[b_start, b_end)` overlap.
///
/// Invalid bounds never overlap anything.
pub fn times_overlap(
    a_start: &WallClock,
    a_end: &WallClock,
    b_start: &WallClock,
    b_end: &WallClock,
) -> bool {
    (a_start.is_same_or_before(b_start) && a_end.is_after(b_start))
        || (b_start.is_same_or_before(a_start) && b_end.is_after(a_start))
}

/// Whether two events share a date and their times overlap.
pub fn events_overlap(a: &Event, b: &Event) -> bool {
    a.date == b.date && times_overlap(&a.start(), &a.end(), &b.start(), &b.end())
}

/// Partition events into conflict groups with a single forward scan.
///
/// Events are visited in input order; an event already placed in a group is
/// skipped. Each remaining event anchors a group and pulls in every later,
/// unplaced event on the same date that overlaps the anchor. Groups of one
/// are dropped, so events with no conflict are absent from the output.
pub fn detect_event_conflicts(events: &[Event]) -> Vec<ConflictGroup<'_>> {
    let refs: Vec<&Event> = events.iter().collect();
    detect_conflicts_in(&refs)
}

/// [`detect_event_conflicts`] over a borrowed selection, such as the events
/// left after a type filter.
pub fn detect_conflicts_in<'a>(events: &[&'a Event]) -> Vec<ConflictGroup<'a>> {
    let mut conflicts = Vec::new();
    let mut processed: HashSet<i64> = HashSet::new();

    for (index, &event) in events.iter().enumerate() {
        if !processed.insert(event.id) {
            continue;
        }

        let start = event.start();
        let end = event.end();
        let mut group = vec![event];

        for &other in &events[index + 1..] {
            if processed.contains(&other.id) || other.date != event.date {
                continue;
            }

            if times_overlap(&start, &end, &other.start(), &other.end()) {
                group.push(other);
                processed.insert(other.id);
            }
        }

        if group.len() > 1 {
            conflicts.push(ConflictGroup { events: group });
        }
    }

    log::debug!(
        "Detected {} conflict group(s) among {} event(s)",
        conflicts.len(),
        events.len()
    );

    conflicts
}
