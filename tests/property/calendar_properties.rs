// Property-based tests for grids, durations, conflicts and suggestions

use chrono::{Datelike, NaiveDate, Weekday};
use event_calendar::models::event::Event;
use event_calendar::services::conflict::{detect_event_conflicts, events_overlap};
use event_calendar::services::reschedule::{find_slot_conflicts, generate_suggestions, MAX_SUGGESTIONS};
use event_calendar::utils::date::{format_date, get_event_duration, get_month_days, Period, WallClock};
use proptest::prelude::*;

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

/// Events on a handful of June 2024 days, each 15 minutes to 3 hours long
fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((10u32..=14, 8 * 60u32..17 * 60, 15u32..=180), 0..20).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(index, (day, start, length))| Event {
                id: index as i64 + 1,
                title: format!("Event {}", index + 1),
                date: format!("2024-06-{}", day),
                start_time: hhmm(start),
                end_time: hhmm(start + length),
                color: "#3b82f6".to_string(),
                event_type: "meeting".to_string(),
                description: String::new(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_duration_matches_minutes(start in 0u32..1200, length in 0u32..239) {
        prop_assert_eq!(
            get_event_duration(&hhmm(start), &hhmm(start + length)),
            i64::from(length)
        );
    }

    #[test]
    fn prop_date_round_trip(date in arb_date()) {
        let text = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(format_date(&WallClock::parse(&text)), text);
    }

    #[test]
    fn prop_month_grid_is_week_aligned(date in arb_date()) {
        let grid = get_month_days(&WallClock::from(date));
        prop_assert!(grid.len() % 7 == 0);
        prop_assert!(grid.len() >= 28 && grid.len() <= 42);

        let first = grid[0].date_naive().unwrap_or_default();
        let last = grid[grid.len() - 1].date_naive().unwrap_or_default();
        prop_assert_eq!(first.weekday(), Weekday::Sun);
        prop_assert_eq!(last.weekday(), Weekday::Sat);

        let month_days = grid
            .iter()
            .filter_map(WallClock::date_naive)
            .filter(|d| d.month() == date.month() && d.year() == date.year())
            .count();
        let expected = WallClock::from(date)
            .end_of(Period::Month)
            .get_date()
            .unwrap_or(0) as usize;
        prop_assert_eq!(month_days, expected);
    }

    #[test]
    fn prop_conflict_groups_are_disjoint_and_anchored(events in arb_events()) {
        let groups = detect_event_conflicts(&events);
        let mut seen = std::collections::HashSet::new();

        for group in &groups {
            prop_assert!(group.len() >= 2);
            let anchor = group.anchor();
            for member in &group.events()[1..] {
                prop_assert!(events_overlap(anchor, member));
            }
            for id in group.ids() {
                prop_assert!(seen.insert(id), "event {} in two groups", id);
            }
        }
    }

    #[test]
    fn prop_suggestions_are_free(events in arb_events(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!events.is_empty());
        let target = &events[pick.index(events.len())];
        let suggestions = generate_suggestions(target, &events);

        prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);
        for slot in &suggestions {
            prop_assert!(slot.date > target.date);
            prop_assert!(
                find_slot_conflicts(target.id, &slot.date, &slot.start_time, &slot.end_time, &events)
                    .is_empty()
            );
        }
    }
}
