//! Time sources of work records.
//!
//! A record's elapsed time comes either from a fixed amount
//! ([`AbsolutePeriod`]) or from clock-of-day values ([`IntervalPeriod`]):
//!
//! ```text
//! absolute:  total = time
//! interval:  total = (end or now) - start - (pause or 0:00)
//! ```
//!
//! An interval without an end is open; its total depends on when it is
//! evaluated, which is why [`Period::total_time`] takes a [`Clock`]. Nothing
//! checks that `start <= end`, a negative total is a valid result.
//!
//! ## Wire Format
//!
//! `{"time": "4:15"}` is absolute. `{"start": "9:00", "end": "17:00", "pause": "0:30"}`
//! is an interval with optional `end` and `pause`. An object carrying `time` is
//! always read as absolute, whatever else it contains.

use super::clock::Clock;
use super::duration::Duration;
use serde::{Deserialize, Deserializer, Serialize};

/// A fixed amount of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbsolutePeriod {
    pub time: Duration,
}

impl AbsolutePeriod {
    pub fn new(time: Duration) -> Self {
        Self { time }
    }
}

/// Work measured between two times of day, less an optional pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntervalPeriod {
    pub start: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause: Option<Duration>,
}

impl IntervalPeriod {
    pub fn new(start: Duration, end: Option<Duration>, pause: Option<Duration>) -> Self {
        Self { start, end, pause }
    }

    /// An open interval starting at `start`.
    pub fn starting_at(start: Duration) -> Self {
        Self::new(start, None, None)
    }

    /// An open interval starting now, the default for freshly recorded work.
    pub fn starting_now(clock: &impl Clock) -> Self {
        Self::starting_at(Duration::now(clock))
    }

    /// The same interval ended at the current time of day.
    pub fn stopped_now(self, clock: &impl Clock) -> Self {
        Self { end: Some(Duration::now(clock)), ..self }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn total_time(&self, clock: &impl Clock) -> Duration {
        let end = match self.end {
            Some(end) => end,
            None => {
                let now = Duration::now(clock);
                tracing::trace!(start = %self.start, now = %now, "evaluating open interval");
                now
            }
        };
        end.subtract(self.start).subtract(self.pause.unwrap_or_default())
    }
}

/// The two period variants, without their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    Absolute,
    Interval,
}

/// A work record's time source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Period {
    Absolute(AbsolutePeriod),
    Interval(IntervalPeriod),
}

impl Period {
    pub fn absolute(time: Duration) -> Self {
        Period::Absolute(AbsolutePeriod::new(time))
    }

    pub fn interval(start: Duration, end: Option<Duration>, pause: Option<Duration>) -> Self {
        Period::Interval(IntervalPeriod::new(start, end, pause))
    }

    pub fn kind(&self) -> PeriodKind {
        match self {
            Period::Absolute(_) => PeriodKind::Absolute,
            Period::Interval(_) => PeriodKind::Interval,
        }
    }

    pub fn is_open(&self) -> bool {
        match self {
            Period::Absolute(_) => false,
            Period::Interval(interval) => interval.is_open(),
        }
    }

    /// Elapsed time, evaluating open intervals against `clock`.
    pub fn total_time(&self, clock: &impl Clock) -> Duration {
        match self {
            Period::Absolute(absolute) => absolute.time,
            Period::Interval(interval) => interval.total_time(clock),
        }
    }

    /// Converts to `kind`, keeping the current total.
    ///
    /// The new variant is seeded from [`Period::total_time`]: an absolute
    /// period takes it as its time, an interval runs from `0:00` to it.
    /// Converting to the kind the period already has returns it unchanged.
    pub fn switch_to(&self, kind: PeriodKind, clock: &impl Clock) -> Self {
        if self.kind() == kind {
            return *self;
        }
        let total = self.total_time(clock);
        match kind {
            PeriodKind::Absolute => Period::absolute(total),
            PeriodKind::Interval => Period::interval(Duration::zero(), Some(total), None),
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Absolute(AbsolutePeriod::default())
    }
}

impl<'de> Deserialize<'de> for Period {
    /// The variant is chosen by the presence of `time`, then that variant's
    /// fields must all be valid.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let period = if value.get("time").is_some() {
            serde_json::from_value(value).map(Period::Absolute)
        } else {
            serde_json::from_value(value).map(Period::Interval)
        };
        period.map_err(serde::de::Error::custom)
    }
}

impl From<AbsolutePeriod> for Period {
    fn from(period: AbsolutePeriod) -> Self {
        Period::Absolute(period)
    }
}

impl From<IntervalPeriod> for Period {
    fn from(period: IntervalPeriod) -> Self {
        Period::Interval(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock(hour: u32, minute: u32) -> FixedClock {
        FixedClock::at(NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(), hour, minute)
    }

    fn t(h: i64, m: i64) -> Duration {
        Duration::make(h, m)
    }

    #[test]
    fn test_closed_interval_total() {
        let period = Period::interval(t(9, 0), Some(t(17, 0)), Some(t(0, 30)));
        assert_eq!(period.total_time(&clock(3, 0)), t(7, 30));
    }

    #[test]
    fn test_interval_without_pause() {
        let period = Period::interval(t(8, 45), Some(t(12, 10)), None);
        assert_eq!(period.total_time(&clock(0, 0)), t(3, 25));
    }

    #[test]
    fn test_open_interval_uses_clock() {
        let period = Period::Interval(IntervalPeriod::starting_at(t(9, 15)));
        assert!(period.is_open());
        assert_eq!(period.total_time(&clock(11, 0)), t(1, 45));
        assert_eq!(period.total_time(&clock(12, 20)), t(3, 5));
    }

    #[test]
    fn test_end_before_start_is_negative() {
        let period = Period::interval(t(17, 0), Some(t(9, 30)), None);
        let total = period.total_time(&clock(0, 0));
        assert!(total.is_negative());
        assert_eq!(total.total_minutes(), -(7 * 60 + 30));
    }

    #[test]
    fn test_absolute_is_unconditional() {
        let period = Period::absolute(t(4, 15));
        assert_eq!(period.total_time(&clock(0, 0)), t(4, 15));
        assert_eq!(period.total_time(&clock(23, 59)), t(4, 15));
        assert!(!period.is_open());
    }

    #[test]
    fn test_switch_preserves_total() {
        let now = clock(16, 0);
        let interval = Period::interval(t(8, 0), Some(t(16, 15)), Some(t(0, 45)));
        let absolute = interval.switch_to(PeriodKind::Absolute, &now);
        assert_eq!(absolute, Period::absolute(t(7, 30)));
        let back = absolute.switch_to(PeriodKind::Interval, &now);
        assert_eq!(back.kind(), PeriodKind::Interval);
        assert_eq!(back.total_time(&clock(1, 0)), t(7, 30));
        assert_eq!(back.switch_to(PeriodKind::Interval, &now), back);
    }

    #[test]
    fn test_time_key_selects_absolute() {
        let both: Period = serde_json::from_str(r#"{"time":"1:10","start":"9:00","end":"10:00"}"#).unwrap();
        assert_eq!(both, Period::absolute(t(1, 10)));
        assert!(serde_json::from_str::<Period>(r#"{"time":"soon","start":"9:00"}"#).is_err());
        assert!(serde_json::from_str::<Period>(r#"{"time":"soon","start":"9:00","end":"10:00"}"#).is_err());
        assert!(serde_json::from_str::<Period>(r#""4:15""#).is_err());
    }

    #[test]
    fn test_switch_freezes_open_interval() {
        let open = Period::Interval(IntervalPeriod::starting_at(t(9, 0)));
        let absolute = open.switch_to(PeriodKind::Absolute, &clock(10, 20));
        assert_eq!(absolute.total_time(&clock(18, 0)), t(1, 20));
    }

    #[test]
    fn test_starting_and_stopping_now() {
        let started = IntervalPeriod::starting_now(&clock(8, 5));
        assert_eq!(started.start, t(8, 5));
        let stopped = started.stopped_now(&clock(12, 0));
        assert_eq!(stopped.end, Some(t(12, 0)));
        assert_eq!(stopped.total_time(&clock(20, 0)), t(3, 55));
    }

    #[test]
    fn test_wire_format() {
        let absolute: Period = serde_json::from_str(r#"{"time":"4:15"}"#).unwrap();
        assert_eq!(absolute, Period::absolute(t(4, 15)));

        let mixed: Period = serde_json::from_str(r#"{"time":"2:00","start":"9:00"}"#).unwrap();
        assert_eq!(mixed.kind(), PeriodKind::Absolute);

        let open: Period = serde_json::from_str(r#"{"start":"09:00"}"#).unwrap();
        assert_eq!(open, Period::Interval(IntervalPeriod::starting_at(t(9, 0))));

        let json = serde_json::to_string(&Period::interval(t(9, 0), Some(t(17, 0)), None)).unwrap();
        assert_eq!(json, r#"{"start":"9:00","end":"17:00"}"#);

        assert!(serde_json::from_str::<Period>(r#"{"pause":"0:30"}"#).is_err());
    }
}
