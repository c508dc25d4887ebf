// Unit tests for wall-clock arithmetic, formatting and grids

use event_calendar::models::view::ViewType;
use event_calendar::utils::date::{
    format_date, format_time, get_event_duration, get_month_days, get_week_days,
    get_year_months, Granularity, Period, Step, WallClock,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn d(input: &str) -> WallClock {
    WallClock::parse(input)
}

#[test_case("2023-01-31", 1, "2023-03-03"; "january overflow into march")]
#[test_case("2024-01-31", 1, "2024-03-02"; "leap year overflow")]
#[test_case("2024-03-15", 1, "2024-04-15"; "plain month step")]
#[test_case("2024-12-10", 1, "2025-01-10"; "year rollover")]
#[test_case("2024-03-31", -1, "2024-03-02"; "backwards into short month")]
fn test_add_months(start: &str, months: i64, expected: &str) {
    assert_eq!(format_date(&d(start).add(months, Step::Month)), expected);
}

#[test_case("2024-06-30", 1, "2024-07-01")]
#[test_case("2024-03-01", -1, "2024-02-29")]
#[test_case("2024-12-31", 1, "2025-01-01")]
fn test_add_days(start: &str, days: i64, expected: &str) {
    assert_eq!(format_date(&d(start).add(days, Step::Day)), expected);
}

#[test]
fn test_subtract_minutes_crosses_midnight() {
    let earlier = d("2024-06-10 00:10").subtract(20, Step::Minute);
    assert_eq!(format_date(&earlier), "2024-06-09");
}

#[test_case("2024-06-12 15:20", Period::Week, "2024-06-09"; "week starts sunday")]
#[test_case("2024-06-12 15:20", Period::Month, "2024-06-01"; "month start")]
#[test_case("2024-06-12 15:20", Period::Day, "2024-06-12"; "day start")]
fn test_start_of(input: &str, period: Period, expected: &str) {
    assert_eq!(format_date(&d(input).start_of(period)), expected);
}

#[test]
fn test_end_of_february_leap() {
    let end = d("2024-02-10").end_of(Period::Month);
    assert_eq!(format_date(&end), "2024-02-29");
    assert!(end.is_same(&d("2024-02-29 23:59:59.999"), Granularity::Instant));
}

#[test_case("YYYY-MM-DD", "2024-06-09")]
#[test_case("MMMM YYYY", "June 2024")]
#[test_case("MMM", "Jun")]
#[test_case("dddd, MMMM D, YYYY", "Sunday, June 9, 2024")]
#[test_case("h:mm A", "12:05 AM")]
#[test_case("unknown", "2024-06-09T00:05:00.000Z"; "falls back to iso")]
fn test_format_patterns(pattern: &str, expected: &str) {
    assert_eq!(d("2024-06-09 00:05").format(pattern), expected);
}

#[test_case(""; "empty")]
#[test_case("not a date"; "garbage")]
#[test_case("2024-02-30"; "impossible day")]
#[test_case("2024-13-01"; "impossible month")]
fn test_invalid_input(input: &str) {
    let value = d(input);
    assert!(!value.is_valid());
    assert_eq!(value.format("YYYY-MM-DD"), "Invalid Date");
    assert_eq!(value.get_time(), None);
    assert!(!value.is_before(&d("2024-06-10")));
    assert!(!value.is_after(&d("2024-06-10")));
}

#[test]
fn test_get_time_reads_naive_as_utc() {
    assert_eq!(d("1970-01-01 00:01").get_time(), Some(60_000));
}

#[test]
fn test_rfc3339_is_normalised_to_utc() {
    assert_eq!(format_date(&d("2024-06-10T01:00:00+02:00")), "2024-06-09");
}

#[test]
fn test_is_past() {
    let today = d("2024-06-10 12:00");
    assert!(!d("2024-06-10 08:00").is_past(&today));
    assert!(d("2024-06-09 23:59").is_past(&today));
    assert!(!d("2024-06-11").is_past(&today));
}

#[test_case("09:00", "10:00", 60)]
#[test_case("09:15", "09:45", 30)]
#[test_case("10:00", "09:00", 0; "inverted")]
#[test_case("noon", "13:00", 0; "malformed")]
fn test_event_duration(start: &str, end: &str, minutes: i64) {
    assert_eq!(get_event_duration(start, end), minutes);
}

#[test]
fn test_format_time() {
    assert_eq!(format_time("13:30"), "1:30 PM");
    assert_eq!(format_time("00:00"), "12:00 AM");
}

#[test_case("2024-06-15", 42; "june 2024 spans six weeks")]
#[test_case("2015-02-10", 28; "february 2015 fits four weeks")]
#[test_case("2024-09-01", 35; "september 2024")]
fn test_month_grid_length(anchor: &str, days: usize) {
    assert_eq!(get_month_days(&d(anchor)).len(), days);
}

#[test]
fn test_month_grid_edges() {
    let grid = get_month_days(&d("2024-06-15"));
    assert_eq!(grid.first().map(format_date).as_deref(), Some("2024-05-26"));
    assert_eq!(grid.last().map(format_date).as_deref(), Some("2024-07-06"));
}

#[test]
fn test_week_days_and_year_months() {
    let week: Vec<String> = get_week_days(&d("2024-06-12")).iter().map(format_date).collect();
    assert_eq!(week.first().map(String::as_str), Some("2024-06-09"));
    assert_eq!(week.last().map(String::as_str), Some("2024-06-15"));

    let year = get_year_months(&d("2024-06-12"));
    assert_eq!(year.len(), 12);
    assert_eq!(format_date(&year[1].month), "2024-02-01");
}

#[test_case(ViewType::Day, "2024-06-11", "2024-06-09")]
#[test_case(ViewType::Week, "2024-06-17", "2024-06-03")]
#[test_case(ViewType::Month, "2024-07-10", "2024-05-10")]
#[test_case(ViewType::Year, "2025-06-10", "2023-06-10")]
fn test_view_navigation(view: ViewType, next: &str, previous: &str) {
    let anchor = d("2024-06-10");
    assert_eq!(format_date(&view.next(&anchor)), next);
    assert_eq!(format_date(&view.previous(&anchor)), previous);
}

#[test_case(ViewType::Day, "2024-06-10", "Monday, June 10, 2024")]
#[test_case(ViewType::Week, "2024-06-12", "June 2024")]
#[test_case(ViewType::Week, "2024-07-02", "Jun - Jul 2024")]
#[test_case(ViewType::Month, "2024-06-12", "June 2024")]
#[test_case(ViewType::Year, "2024-06-12", "2024")]
fn test_view_titles(view: ViewType, anchor: &str, expected: &str) {
    assert_eq!(view.title(&d(anchor)), expected);
}
