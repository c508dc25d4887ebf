//! Source of "today" for past-ness and highlighting decisions.

use super::date::WallClock;

/// Supplies the current wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> WallClock;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> WallClock {
        WallClock::now()
    }
}

/// Always reports the same instant. Handy for replaying a day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub WallClock);

impl Clock for FixedClock {
    fn now(&self) -> WallClock {
        self.0
    }
}
