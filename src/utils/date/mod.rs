// Date utilities
// Wall-clock values, label formatting and calendar grids

pub mod format;
pub mod grid;
pub mod wall_clock;

pub use format::{format_date, format_time, get_event_duration};
pub use grid::{get_month_days, get_week_days, get_year_months, MonthGrid};
pub use wall_clock::{is_current_month, is_today, Granularity, Period, Step, WallClock};
