// View module
// Calendar view modes, navigation steps and header titles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::{Period, Step, WallClock};

/// Calendar view types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view {0:?} (expected day, week, month or year)")]
pub struct ParseViewTypeError(String);

impl ViewType {
    pub const ALL: [ViewType; 4] = [ViewType::Day, ViewType::Week, ViewType::Month, ViewType::Year];

    pub fn name(&self) -> &'static str {
        match self {
            ViewType::Day => "day",
            ViewType::Week => "week",
            ViewType::Month => "month",
            ViewType::Year => "year",
        }
    }

    /// Anchor after stepping one view-length back.
    pub fn previous(&self, anchor: &WallClock) -> WallClock {
        let (amount, step) = self.stride();
        anchor.subtract(amount, step)
    }

    /// Anchor after stepping one view-length forward.
    pub fn next(&self, anchor: &WallClock) -> WallClock {
        let (amount, step) = self.stride();
        anchor.add(amount, step)
    }

    /// Header text for the view anchored at `anchor`.
    pub fn title(&self, anchor: &WallClock) -> String {
        match self {
            ViewType::Day => anchor.format("dddd, MMMM D, YYYY"),
            ViewType::Week => week_range_title(anchor),
            ViewType::Month => anchor.format("MMMM YYYY"),
            ViewType::Year => match anchor.year() {
                Some(year) => year.to_string(),
                None => anchor.format("YYYY-MM-DD"),
            },
        }
    }

    fn stride(&self) -> (i64, Step) {
        match self {
            ViewType::Day => (1, Step::Day),
            ViewType::Week => (7, Step::Day),
            ViewType::Month => (1, Step::Month),
            ViewType::Year => (12, Step::Month),
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewType {
    type Err = ParseViewTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ViewType::ALL
            .into_iter()
            .find(|view| view.name() == wanted)
            .ok_or_else(|| ParseViewTypeError(s.to_string()))
    }
}

/// `"June 2024"` when the week sits in one month, else `"Jun - Jul 2024"`.
fn week_range_title(anchor: &WallClock) -> String {
    let start = anchor.start_of(Period::Week);
    let end = anchor.end_of(Period::Week);
    if start.format("MMMM") == end.format("MMMM") {
        start.format("MMMM YYYY")
    } else {
        format!("{} - {}", start.format("MMM"), end.format("MMM YYYY"))
    }
}

/// Row label for an hour of the day/week time grid (`"12 AM"`, `"3 PM"`).
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        h if h < 12 => format!("{} AM", h),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}
