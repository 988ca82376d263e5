//! Normalized hour and minute values.
//!
//! A [`Duration`] is the unit every other part of the engine speaks: clock
//! times of an interval, fixed amounts of work and aggregated totals are all
//! `(hours, minutes)` pairs. The minutes component always lies in `[0, 60)`;
//! anything beyond is carried into the hours, and a borrow from the hours
//! may leave them negative. A negative value is a deficit, not an error, and
//! it is formatted as-is.
//!
//! ## Text Format
//!
//! - Formatting yields `"{hours}:{minutes:02}"`, e.g. `"7:30"`, `"-1:45"`, `"120:05"`.
//! - Parsing accepts up to two digits on each side of a `:` and treats an empty
//!   side as zero, so `"9:"`, `":30"` and `"09:05"` are all valid.
//!
//! ```rust
//! use workweek::libs::duration::Duration;
//!
//! let worked = Duration::make(8, 15) - Duration::make(0, 45);
//! assert_eq!(worked.to_string(), "7:30");
//! assert_eq!(Duration::parse("7:30"), Some(worked));
//! assert_eq!(Duration::parse("7.30"), None);
//! ```

use super::clock::Clock;
use super::error::Error;
use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

const MINUTES_PER_HOUR: i64 = 60;

/// An hours and minutes amount with `0 <= minutes < 60`.
///
/// Field order makes the derived ordering chronological: since minutes are
/// normalized, comparing `(hours, minutes)` is the same as comparing total
/// minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    hours: i64,
    minutes: i64,
}

impl Duration {
    /// Builds a normalized value, carrying whole hours out of `minutes`.
    ///
    /// Any integers are accepted. Negative minutes borrow from the hours so
    /// that `make(1, -15)` is `0:45`. Hours saturate at the `i64` bounds.
    pub fn make(hours: i64, minutes: i64) -> Self {
        Self {
            hours: hours.saturating_add(minutes.div_euclid(MINUTES_PER_HOUR)),
            minutes: minutes.rem_euclid(MINUTES_PER_HOUR),
        }
    }

    /// `0:00`, the identity for [`Duration::add`].
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a value from a signed minute count.
    pub fn from_minutes(minutes: i64) -> Self {
        Self::make(0, minutes)
    }

    /// Reads an `H:MM` literal.
    ///
    /// Returns `None` unless the text is at most two digits, a colon and at
    /// most two digits. Signs, whitespace and seconds are not accepted.
    pub fn parse(text: &str) -> Option<Self> {
        let (hours, minutes) = text.split_once(':')?;
        Some(Self::make(parse_component(hours)?, parse_component(minutes)?))
    }

    /// The current time of day on `clock`.
    pub fn now(clock: &impl Clock) -> Self {
        clock.time_of_day()
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours.saturating_mul(MINUTES_PER_HOUR).saturating_add(self.minutes)
    }

    pub fn is_negative(&self) -> bool {
        self.hours < 0
    }

    /// Sum with the minute overflow carried into the hours.
    pub fn add(self, other: Self) -> Self {
        let minutes = self.minutes + other.minutes;
        Self::make(
            self.hours
                .saturating_add(other.hours)
                .saturating_add(minutes.div_euclid(MINUTES_PER_HOUR)),
            minutes.rem_euclid(MINUTES_PER_HOUR),
        )
    }

    /// Difference, borrowing one hour when `other` has more minutes.
    ///
    /// The result may have negative hours.
    pub fn subtract(self, other: Self) -> Self {
        if other.minutes > self.minutes {
            let borrow = (other.minutes - self.minutes + MINUTES_PER_HOUR - 1) / MINUTES_PER_HOUR;
            Self::make(
                self.hours.saturating_sub(other.hours).saturating_sub(borrow),
                self.minutes - other.minutes + MINUTES_PER_HOUR,
            )
        } else {
            Self::make(self.hours.saturating_sub(other.hours), self.minutes - other.minutes)
        }
    }

    /// Renders `"{hours}:{minutes:02}"`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Clamped to the range `TimeDelta` can represent.
    pub fn to_time_delta(&self) -> TimeDelta {
        let bound = if self.is_negative() { TimeDelta::MIN } else { TimeDelta::MAX };
        TimeDelta::try_minutes(self.total_minutes()).unwrap_or(bound)
    }
}

fn parse_component(text: &str) -> Option<i64> {
    if text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.is_empty() {
        return Some(0);
    }
    text.parse().ok()
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidDuration(s.to_string()))
    }
}

impl From<TimeDelta> for Duration {
    /// Truncates to whole minutes.
    fn from(delta: TimeDelta) -> Self {
        Self::from_minutes(delta.num_minutes())
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Self) -> Self::Output {
        Duration::add(self, rhs)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Duration::zero(), Duration::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
