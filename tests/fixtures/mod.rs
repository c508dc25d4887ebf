// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use event_calendar::models::event::Event;
use event_calendar::utils::date::WallClock;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, June 10 2024 at 08:30
    pub fn monday_morning() -> WallClock {
        WallClock::parse("2024-06-10 08:30")
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> WallClock {
        WallClock::parse("2024-02-29")
    }

    /// Jan 31, 2023, the classic month-overflow anchor
    pub fn end_of_january_2023() -> WallClock {
        WallClock::parse("2023-01-31")
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: i64, date: &str, start: &str, end: &str) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            color: "#3b82f6".to_string(),
            event_type: "meeting".to_string(),
            description: String::new(),
        }
    }

    /// Two overlapping meetings on Monday June 10, 2024
    pub fn overlapping_pair() -> Vec<Event> {
        vec![
            event(1, "2024-06-10", "09:00", "10:00"),
            event(2, "2024-06-10", "09:30", "10:30"),
        ]
    }

    /// A quiet week with one event a day at lunchtime
    pub fn lunch_week() -> Vec<Event> {
        (10..=14)
            .map(|day| event(day, &format!("2024-06-{}", day), "12:00", "13:00"))
            .collect()
    }
}
