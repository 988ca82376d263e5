//! Calendar months and the weeks they span.
//!
//! A month's edge weeks are numbered relative to the month's own year (see
//! [`local_week_number`]), so January may start with week `0` and December
//! may end with week `53`. Each spanned week still covers the right Monday to
//! Sunday range, which is what grouping work records by week relies on.

use super::clock::Clock;
use super::error::{Error, Result};
use super::week::{local_week_number, shift_days, CalendarWeek};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A `(year, month)` pair with `month` in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Month numbers outside 1..=12 roll over into adjacent years, so
    /// `from_parts(2024, 13)` is January 2025 and `from_parts(2024, 0)` is
    /// December 2023.
    pub fn from_parts(year: i32, month: i32) -> Self {
        let zero_based = month - 1;
        Self {
            year: year + zero_based.div_euclid(12),
            month: zero_based.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Reads a `YYYY-MM` literal. Anything after the month digits is ignored,
    /// so a full `YYYY-MM-DD` date also selects its month.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMonth(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() < 7 || bytes[4] != b'-' {
            return Err(invalid());
        }
        let digits = |range: std::ops::Range<usize>| -> Option<i32> {
            let part = s.get(range)?;
            part.bytes().all(|b| b.is_ascii_digit()).then(|| part.parse().ok()).flatten()
        };
        let year = digits(0..4).ok_or_else(invalid)?;
        let month = digits(5..7).ok_or_else(invalid)?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self::from_parts(year, month))
    }

    pub fn current(clock: &impl Clock) -> Self {
        Self::from_date(clock.today())
    }

    /// Parses `s`, using the current month when it cannot be read.
    pub fn parse_or_current(s: &str, clock: &impl Clock) -> Self {
        Self::parse(s).unwrap_or_else(|e| {
            tracing::warn!(literal = s, error = %e, "falling back to the current month");
            Self::current(clock)
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(if self.year < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
    }

    /// Day zero of the following month.
    pub fn last_day(&self) -> NaiveDate {
        shift_days(self.next().first_day(), -1)
    }

    pub fn next(&self) -> Self {
        Self::from_parts(self.year, self.month as i32 + 1)
    }

    pub fn previous(&self) -> Self {
        Self::from_parts(self.year, self.month as i32 - 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Every week overlapping the month, in order, numbered within the
    /// first day's year.
    pub fn spanned_weeks(&self) -> Vec<CalendarWeek> {
        let first_day = self.first_day();
        let year = first_day.year();
        let first_week = local_week_number(first_day, year);
        let last_week = local_week_number(self.last_day(), year);
        (first_week..=last_week)
            .filter_map(|week| u32::try_from(week).ok())
            .map(|week| CalendarWeek::from_parts(year, week))
            .collect()
    }

    /// `YYYY-MM`.
    pub fn to_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for CalendarMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::clock::FixedClock;
    use crate::libs::week::week_number;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_and_last_day() {
        let feb = CalendarMonth::from_parts(2024, 2);
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));
        assert_eq!(CalendarMonth::from_parts(2023, 2).last_day(), date(2023, 2, 28));
        assert_eq!(CalendarMonth::from_parts(2100, 2).last_day(), date(2100, 2, 28));
        assert_eq!(CalendarMonth::from_parts(2024, 12).last_day(), date(2024, 12, 31));
        assert_eq!(CalendarMonth::from_parts(2024, 4).last_day(), date(2024, 4, 30));
    }

    #[test]
    fn test_from_parts_rolls_over() {
        assert_eq!(CalendarMonth::from_parts(2024, 13), CalendarMonth::from_parts(2025, 1));
        assert_eq!(CalendarMonth::from_parts(2024, 0), CalendarMonth::from_parts(2023, 12));
        assert_eq!(CalendarMonth::from_parts(2024, -11).to_label(), "2023-01");
    }

    #[test]
    fn test_spanned_weeks_february_2024() {
        let feb = CalendarMonth::from_parts(2024, 2);
        let weeks = feb.spanned_weeks();
        let expected = week_number(feb.last_day()) - week_number(feb.first_day()) + 1;
        assert_eq!(weeks.len() as u32, expected);
        assert_eq!(weeks.first().unwrap().to_label(), "2024-W05");
        assert_eq!(weeks.last().unwrap().to_label(), "2024-W09");
        let first = weeks[0];
        assert!(first.monday() <= feb.first_day() && feb.first_day() <= first.friday());
    }

    #[test]
    fn test_spanned_weeks_cover_every_day() {
        for year in [2020, 2021, 2022, 2024, 2026, 2027] {
            for m in 1..=12 {
                let month = CalendarMonth::from_parts(year, m);
                let weeks = month.spanned_weeks();
                let mut day = month.first_day();
                while day <= month.last_day() {
                    assert!(weeks.iter().any(|w| w.contains(day)), "{day} missing from {month}");
                    day = day.succ_opt().unwrap();
                }
                for pair in weeks.windows(2) {
                    assert_eq!(pair[1].monday() - pair[0].monday(), chrono::TimeDelta::days(7));
                }
            }
        }
    }

    #[test]
    fn test_spanned_weeks_year_edges() {
        // 2021-01-01 is a Friday of ISO week 2020-W53; locally it is week 0.
        let jan = CalendarMonth::from_parts(2021, 1).spanned_weeks();
        assert_eq!(jan.len(), 5);
        assert_eq!(jan[0].to_label(), "2021-W00");
        assert_eq!(jan[0].monday(), date(2020, 12, 28));
        // 2024-12-31 belongs to ISO week 2025-W01; locally it is week 53.
        let dec = CalendarMonth::from_parts(2024, 12).spanned_weeks();
        assert_eq!(dec.last().unwrap().to_label(), "2024-W53");
        assert_eq!(dec.last().unwrap().monday(), date(2024, 12, 30));
    }

    #[test]
    fn test_parse() {
        assert_eq!(CalendarMonth::parse("2024-02").unwrap(), CalendarMonth::from_parts(2024, 2));
        assert_eq!(CalendarMonth::parse("2024-02-17").unwrap(), CalendarMonth::from_parts(2024, 2));
        for s in ["", "2024", "2024-2", "2024-13", "2024-00", "abcd-01", "2024/02"] {
            assert!(matches!(CalendarMonth::parse(s), Err(Error::InvalidMonth(_))), "{s:?}");
        }
    }

    #[test]
    fn test_parse_or_current_uses_one_based_month() {
        let clock = FixedClock::at(date(2024, 3, 6), 10, 0);
        assert_eq!(CalendarMonth::parse_or_current("", &clock), CalendarMonth::from_parts(2024, 3));
    }

    #[test]
    fn test_contains() {
        let month = CalendarMonth::from_parts(2024, 3);
        assert!(month.contains(date(2024, 3, 31)));
        assert!(!month.contains(date(2024, 4, 1)));
        assert!(!month.contains(date(2023, 3, 15)));
    }
}
