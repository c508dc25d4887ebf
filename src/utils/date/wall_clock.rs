//! Immutable wall-clock value with calendar-aware arithmetic.
//!
//! A [`WallClock`] wraps a naive local date/time. Parsing never fails loudly:
//! unparseable input produces an *invalid* value that formats as
//! `"Invalid Date"` and never compares as before, after or equal to anything.

use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Sentinel rendered by [`WallClock::format`] for invalid values.
pub const INVALID_DATE: &str = "Invalid Date";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// Longest formats first so trailing seconds are not rejected as extra input.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Calendar period used by [`WallClock::start_of`] and [`WallClock::end_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    /// Sunday through Saturday.
    Week,
    Month,
}

/// Unit accepted by [`WallClock::add`] and [`WallClock::subtract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Minute,
    Day,
    Month,
}

/// Granularity for [`WallClock::is_same`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Exact instant equality.
    Instant,
    /// Same calendar day, any time of day.
    Day,
    /// Same calendar year and month.
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallClock {
    instant: Option<NaiveDateTime>,
}

impl WallClock {
    /// The current local wall-clock time.
    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }

    /// An invalid value, as produced by unparseable input.
    pub fn invalid() -> Self {
        Self { instant: None }
    }

    /// Parse a date or date/time string.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS[.fff]]`, the same with a
    /// `T` separator, and RFC 3339 strings with an offset (normalised to UTC,
    /// matching the ISO rendering of [`WallClock::format`]).
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::invalid();
        }

        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Self::from(date);
        }

        for pattern in DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
                return Self::from(dt);
            }
        }

        match chrono::DateTime::parse_from_rfc3339(input) {
            Ok(dt) => Self::from(dt.naive_utc()),
            Err(_) => Self::invalid(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    pub fn naive(&self) -> Option<NaiveDateTime> {
        self.instant
    }

    pub fn date_naive(&self) -> Option<NaiveDate> {
        self.instant.map(|dt| dt.date())
    }

    pub fn year(&self) -> Option<i32> {
        self.instant.map(|dt| dt.year())
    }

    /// Month number, 1 through 12.
    pub fn month(&self) -> Option<u32> {
        self.instant.map(|dt| dt.month())
    }

    /// Day of the month.
    pub fn get_date(&self) -> Option<u32> {
        self.instant.map(|dt| dt.day())
    }

    /// Milliseconds since the Unix epoch, reading the wall clock as UTC.
    pub fn get_time(&self) -> Option<i64> {
        self.instant.map(|dt| dt.and_utc().timestamp_millis())
    }

    /// Render with one of the supported patterns.
    ///
    /// Supported: `YYYY-MM-DD`, `MMMM YYYY`, `MMMM`, `MMM`, `MMM YYYY`,
    /// `dddd, MMMM D, YYYY` and `h:mm A`. Anything else renders the full
    /// ISO-8601 form. Invalid values always render [`INVALID_DATE`].
    pub fn format(&self, pattern: &str) -> String {
        let Some(dt) = self.instant else {
            return INVALID_DATE.to_string();
        };

        let year = dt.year();
        let month_name = MONTH_NAMES[dt.month0() as usize];
        let short_month = &month_name[..3];

        match pattern {
            "YYYY-MM-DD" => format!("{}-{:02}-{:02}", year, dt.month(), dt.day()),
            "MMMM YYYY" => format!("{} {}", month_name, year),
            "MMMM" => month_name.to_string(),
            "MMM" => short_month.to_string(),
            "MMM YYYY" => format!("{} {}", short_month, year),
            "dddd, MMMM D, YYYY" => format!(
                "{}, {} {}, {}",
                DAY_NAMES[dt.weekday().num_days_from_sunday() as usize],
                month_name,
                dt.day(),
                year
            ),
            "h:mm A" => {
                let hours = dt.hour();
                let hour12 = match hours {
                    0 => 12,
                    h if h > 12 => h - 12,
                    h => h,
                };
                let meridiem = if hours >= 12 { "PM" } else { "AM" };
                format!("{}:{:02} {}", hour12, dt.minute(), meridiem)
            }
            _ => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        }
    }

    pub fn start_of(&self, period: Period) -> Self {
        self.map(|dt| {
            let date = match period {
                Period::Day => dt.date(),
                Period::Week => {
                    let offset = dt.weekday().num_days_from_sunday();
                    dt.date().checked_sub_days(Days::new(u64::from(offset)))?
                }
                Period::Month => dt.date().with_day(1)?,
            };
            Some(date.and_time(NaiveTime::MIN))
        })
    }

    pub fn end_of(&self, period: Period) -> Self {
        self.map(|dt| {
            let date = match period {
                Period::Day => dt.date(),
                Period::Week => {
                    let offset = 6 - dt.weekday().num_days_from_sunday();
                    dt.date().checked_add_days(Days::new(u64::from(offset)))?
                }
                Period::Month => last_day_of_month(dt.year(), dt.month())?,
            };
            Some(date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?))
        })
    }

    /// Shift by `amount` units.
    ///
    /// Month steps keep the day of the month and let it overflow into the
    /// following month when the target month is shorter, so Jan 31 plus one
    /// month lands on Mar 3 (Mar 2 in leap years).
    pub fn add(&self, amount: i64, step: Step) -> Self {
        self.map(|dt| match step {
            Step::Minute => dt.checked_add_signed(TimeDelta::try_minutes(amount)?),
            Step::Day => dt.checked_add_signed(TimeDelta::try_days(amount)?),
            Step::Month => add_months_with_rollover(dt, amount),
        })
    }

    pub fn subtract(&self, amount: i64, step: Step) -> Self {
        match amount.checked_neg() {
            Some(negated) => self.add(negated, step),
            None => Self::invalid(),
        }
    }

    /// Compare at the given granularity.
    ///
    /// Two invalid values are the same day (both render the same date
    /// string) but never the same month or instant.
    pub fn is_same(&self, other: &WallClock, granularity: Granularity) -> bool {
        match (self.instant, other.instant) {
            (Some(a), Some(b)) => match granularity {
                Granularity::Instant => a == b,
                Granularity::Day => a.date() == b.date(),
                Granularity::Month => a.year() == b.year() && a.month() == b.month(),
            },
            (None, None) => granularity == Granularity::Day,
            _ => false,
        }
    }

    pub fn is_same_or_before(&self, other: &WallClock) -> bool {
        self.compare_with(other, |a, b| a <= b)
    }

    pub fn is_same_or_after(&self, other: &WallClock) -> bool {
        self.compare_with(other, |a, b| a >= b)
    }

    pub fn is_after(&self, other: &WallClock) -> bool {
        self.compare_with(other, |a, b| a > b)
    }

    pub fn is_before(&self, other: &WallClock) -> bool {
        self.compare_with(other, |a, b| a < b)
    }

    /// A value is past when it falls on an earlier calendar day than `today`.
    ///
    /// Any time on today's calendar day is never past, even when its instant
    /// is earlier than `today`.
    pub fn is_past(&self, today: &WallClock) -> bool {
        if self.is_same(today, Granularity::Day) {
            return false;
        }
        self.is_before(today)
    }

    fn map(&self, f: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>) -> Self {
        Self {
            instant: self.instant.and_then(f),
        }
    }

    fn compare_with(&self, other: &WallClock, cmp: impl FnOnce(i64, i64) -> bool) -> bool {
        match (self.get_time(), other.get_time()) {
            (Some(a), Some(b)) => cmp(a, b),
            _ => false,
        }
    }
}

impl From<NaiveDateTime> for WallClock {
    fn from(dt: NaiveDateTime) -> Self {
        Self { instant: Some(dt) }
    }
}

impl From<NaiveDate> for WallClock {
    fn from(date: NaiveDate) -> Self {
        Self::from(date.and_time(NaiveTime::MIN))
    }
}

impl From<&str> for WallClock {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(""))
    }
}

/// Whether `date` falls on the same calendar day as `today`.
pub fn is_today(date: &WallClock, today: &WallClock) -> bool {
    date.is_same(today, Granularity::Day)
}

/// Whether `date` falls in the same calendar month as `current_month`.
pub fn is_current_month(date: &WallClock, current_month: &WallClock) -> bool {
    date.is_same(current_month, Granularity::Month)
}

pub(crate) fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

fn add_months_with_rollover(dt: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let total = i64::from(dt.year())
        .checked_mul(12)?
        .checked_add(i64::from(dt.month0()))?
        .checked_add(amount)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_days(Days::new(u64::from(dt.day() - 1)))?;
    Some(date.and_time(dt.time()))
}
