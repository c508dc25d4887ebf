//! Header counters and in-app notifications derived from the event list.

use serde::Serialize;

use crate::models::event::Event;
use crate::services::conflict::events_overlap;
use crate::services::event::get_events_for_date;
use crate::utils::date::{format_time, Period, WallClock};

/// Reminders fire for today's events starting within this many minutes.
pub const REMINDER_WINDOW_MINUTES: i64 = 15;

/// Cap on the upcoming-events counter.
pub const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub today_events: usize,
    pub week_events: usize,
    pub upcoming_events: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Reminder,
    #[serde(rename = "new_event")]
    TodaySchedule,
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub event_id: Option<i64>,
    pub is_read: bool,
}

/// Counts for today, the current Sunday-Saturday week, and days after today.
pub fn schedule_summary(events: &[Event], now: &WallClock) -> ScheduleSummary {
    let week_start = now.start_of(Period::Week);
    let week_end = now.end_of(Period::Week);

    let week_events = events
        .iter()
        .filter(|event| {
            let day = event.day();
            day.is_same_or_after(&week_start) && day.is_same_or_before(&week_end)
        })
        .count();

    let upcoming_events = events
        .iter()
        .filter(|event| event.day().is_after(now))
        .take(UPCOMING_LIMIT)
        .count();

    ScheduleSummary {
        today_events: get_events_for_date(events, now).len(),
        week_events,
        upcoming_events,
    }
}

/// Minutes from `now` until the event starts, rounded down.
pub fn minutes_until(event: &Event, now: &WallClock) -> Option<i64> {
    let start = event.start().get_time()?;
    let now = now.get_time()?;
    Some((start - now).div_euclid(60_000))
}

/// Notifications in display order: reminders, today's schedule, conflicts.
pub fn generate_notifications(events: &[Event], now: &WallClock) -> Vec<Notification> {
    let mut notifications = Vec::new();
    let today = get_events_for_date(events, now);

    for event in &today {
        let Some(minutes) = minutes_until(event, now) else {
            continue;
        };
        if minutes > 0 && minutes <= REMINDER_WINDOW_MINUTES {
            notifications.push(Notification {
                id: format!("reminder-{}", event.id),
                kind: NotificationKind::Reminder,
                title: "Upcoming Event".to_string(),
                message: format!("{} starts in {} minutes", event.title, minutes),
                time: format_time(&event.start_time),
                event_id: Some(event.id),
                is_read: false,
            });
        }
    }

    if !today.is_empty() {
        notifications.push(Notification {
            id: "events-today".to_string(),
            kind: NotificationKind::TodaySchedule,
            title: "Today's Schedule".to_string(),
            message: format!("{} events scheduled for today", today.len()),
            time: "Today".to_string(),
            event_id: None,
            is_read: false,
        });
    }

    let conflicting = count_conflicting_events(events);
    if conflicting > 0 {
        notifications.push(Notification {
            id: "conflicts".to_string(),
            kind: NotificationKind::Conflict,
            title: "Schedule Conflicts".to_string(),
            message: format!("{} conflicting events detected", conflicting),
            time: "Now".to_string(),
            event_id: None,
            is_read: false,
        });
    }

    log::debug!("Generated {} notification(s)", notifications.len());
    notifications
}

/// Events that overlap some event listed after them.
///
/// The last event of an overlapping pair is not counted, so three mutually
/// overlapping events count as two.
pub fn count_conflicting_events(events: &[Event]) -> usize {
    events
        .iter()
        .enumerate()
        .filter(|(index, event)| {
            events[index + 1..]
                .iter()
                .any(|other| events_overlap(event, other))
        })
        .count()
}

/// Notification list with read tracking.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn refresh(&mut self, events: &[Event], now: &WallClock) {
        self.notifications = generate_notifications(events, now);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.is_read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }
}
