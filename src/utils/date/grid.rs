//! Week-aligned day grids for the month, week and year views.

use chrono::NaiveDate;

use super::wall_clock::{Period, Step, WallClock};

/// One month of a year view: the month's first day and its week-aligned grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub month: WallClock,
    pub days: Vec<WallClock>,
}

/// Every day from the Sunday on or before the 1st of `anchor`'s month
/// through the Saturday on or after its last day.
///
/// The result always holds whole weeks (28, 35 or 42 days). An invalid
/// anchor yields an empty grid.
pub fn get_month_days(anchor: &WallClock) -> Vec<WallClock> {
    let first = anchor.start_of(Period::Month).start_of(Period::Week);
    let last = anchor.end_of(Period::Month).end_of(Period::Week);
    days_between(first, &last)
}

/// The seven days, Sunday through Saturday, of the week containing `anchor`.
pub fn get_week_days(anchor: &WallClock) -> Vec<WallClock> {
    let sunday = anchor.start_of(Period::Week);
    if !sunday.is_valid() {
        return Vec::new();
    }
    (0..7).map(|offset| sunday.add(offset, Step::Day)).collect()
}

/// Month grids for January through December of `anchor`'s year.
pub fn get_year_months(anchor: &WallClock) -> Vec<MonthGrid> {
    let Some(year) = anchor.year() else {
        return Vec::new();
    };

    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|first| {
            let month = WallClock::from(first);
            let days = get_month_days(&month);
            MonthGrid { month, days }
        })
        .collect()
}

fn days_between(first: WallClock, last: &WallClock) -> Vec<WallClock> {
    let mut days = Vec::new();
    let mut current = first;

    while current.is_same_or_before(last) {
        days.push(current);
        current = current.add(1, Step::Day);
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::format::format_date;
    use pretty_assertions::assert_eq;

    fn labels(days: &[WallClock]) -> Vec<String> {
        days.iter().map(format_date).collect()
    }

    #[test]
    fn test_june_2024_needs_six_weeks() {
        let days = get_month_days(&WallClock::parse("2024-06-10"));
        assert_eq!(days.len(), 42);
        assert_eq!(format_date(&days[0]), "2024-05-26");
        assert_eq!(format_date(&days[41]), "2024-07-06");
    }

    #[test]
    fn test_february_2015_fits_four_weeks() {
        // Feb 1 2015 was a Sunday and Feb 28 a Saturday
        let days = get_month_days(&WallClock::parse("2015-02-14 13:00"));
        assert_eq!(days.len(), 28);
        assert_eq!(format_date(&days[0]), "2015-02-01");
        assert_eq!(format_date(&days[27]), "2015-02-28");
    }

    #[test]
    fn test_september_2024_needs_five_weeks() {
        let days = get_month_days(&WallClock::parse("2024-09-30"));
        assert_eq!(days.len(), 35);
        assert_eq!(format_date(&days[0]), "2024-09-01");
        assert_eq!(format_date(&days[34]), "2024-10-05");
    }

    #[test]
    fn test_month_days_start_at_midnight() {
        let days = get_month_days(&WallClock::parse("2024-06-10 17:30"));
        assert!(days.iter().all(|d| d.format("h:mm A") == "12:00 AM"));
    }

    #[test]
    fn test_invalid_anchor_gives_empty_grid() {
        assert!(get_month_days(&WallClock::invalid()).is_empty());
        assert!(get_week_days(&WallClock::invalid()).is_empty());
        assert!(get_year_months(&WallClock::invalid()).is_empty());
    }

    #[test]
    fn test_week_days() {
        let days = get_week_days(&WallClock::parse("2024-06-12"));
        assert_eq!(
            labels(&days),
            vec![
                "2024-06-09",
                "2024-06-10",
                "2024-06-11",
                "2024-06-12",
                "2024-06-13",
                "2024-06-14",
                "2024-06-15",
            ]
        );
    }

    #[test]
    fn test_year_months() {
        let months = get_year_months(&WallClock::parse("2024-06-10"));
        assert_eq!(months.len(), 12);
        assert_eq!(format_date(&months[0].month), "2024-01-01");
        assert_eq!(format_date(&months[11].month), "2024-12-01");
        assert!(months.iter().all(|m| m.days.len() % 7 == 0));
    }
}
