//! Wall-clock access for the engine.
//!
//! Everything in `libs` is a pure function of its arguments except the
//! evaluation of open intervals and the "today" defaults. Both read time
//! through the [`Clock`] trait so tests can pin the current moment while the
//! binary uses the host's local time.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use workweek::libs::clock::{Clock, FixedClock};
//!
//! let clock = FixedClock::at(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(), 14, 5);
//! assert_eq!(clock.time_of_day().to_string(), "14:05");
//! ```

use super::duration::Duration;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Source of the current local date and time.
pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// The current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// The current hour and minute as a clock-of-day [`Duration`].
    fn time_of_day(&self) -> Duration {
        let now = self.now();
        Duration::make(i64::from(now.hour()), i64::from(now.minute()))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// The host clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Freezes the clock at `hour:minute` on `date`.
    ///
    /// Out-of-range clock values fall back to midnight.
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Self {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
        Self(NaiveDateTime::new(date, time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
