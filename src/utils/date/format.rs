//! Human-readable labels for dates and `HH:MM` time strings.

use super::wall_clock::{WallClock, INVALID_DATE};

/// Calendar day used to anchor bare `HH:MM` strings.
pub const REFERENCE_DAY: &str = "2000-01-01";

/// Placeholder shown in place of a time that cannot be parsed.
pub const EN_DASH: &str = "\u{2013}";

/// Format as `YYYY-MM-DD`.
pub fn format_date(date: &WallClock) -> String {
    date.format("YYYY-MM-DD")
}

/// Anchor a bare `HH:MM` string to [`REFERENCE_DAY`].
pub fn time_on_reference_day(time: &str) -> WallClock {
    WallClock::parse(&format!("{} {}", REFERENCE_DAY, time))
}

/// Render an `HH:MM` string on a 12-hour clock (`"2:30 PM"`).
///
/// Unparseable input renders as [`EN_DASH`].
pub fn format_time(time: &str) -> String {
    let pretty = time_on_reference_day(time).format("h:mm A");
    if pretty == INVALID_DATE {
        EN_DASH.to_string()
    } else {
        pretty
    }
}

/// Whole minutes from `start_time` to `end_time`.
///
/// Returns 0 when either side does not parse or when the end is not after
/// the start.
pub fn get_event_duration(start_time: &str, end_time: &str) -> i64 {
    let start = time_on_reference_day(start_time);
    let end = time_on_reference_day(end_time);

    let (Some(start_ms), Some(end_ms)) = (start.get_time(), end.get_time()) else {
        return 0;
    };

    let diff = ((end_ms - start_ms) as f64 / 60_000.0).round();
    if diff.is_finite() && diff > 0.0 {
        diff as i64
    } else {
        0
    }
}
