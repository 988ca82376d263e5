//! Calendar weeks and ISO-8601 week numbering.
//!
//! Week 1 of a year is the week that contains the year's first Thursday and
//! weeks run Monday to Sunday. A [`CalendarWeek`] stores only `(year, week)`;
//! its days are derived from the first-Thursday rule on demand.
//!
//! ## Numbering Functions
//!
//! - [`week_number`] is the exact ISO week number of a date. It anchors on the
//!   Thursday of the date's week and counts weeks from January 1 of that
//!   Thursday's year.
//! - [`local_week_number`] counts the same week relative to week 1 of a
//!   caller-chosen year. Early January days that belong to the previous ISO
//!   year come out as week `0`, late December days that belong to the next ISO
//!   year as week `53`. Weeks built from calendar dates and the weeks spanned
//!   by a month use this numbering against the date's own calendar year, which
//!   keeps their Monday..Sunday range around the date but may label an edge
//!   week differently from ISO.
//!
//! ## Literals
//!
//! - `YYYY-Www`, as produced by an HTML week input (`2024-W05`)
//! - `YYYY-MM-DD`, interpreted as the week containing that date
//!
//! Parsing returns an error for anything else. Falling back to the current
//! week is a separate, explicit policy: [`CalendarWeek::parse_or_current`].

use super::clock::Clock;
use super::error::{Error, Result};
use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const DAYS_PER_WEEK: i64 = 7;

/// Monday = 1 .. Sunday = 7.
fn iso_weekday(date: NaiveDate) -> i64 {
    i64::from(date.weekday().number_from_monday())
}

/// Moves `date` by `days`, saturating at the range chrono can represent.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(TimeDelta::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

fn january_first(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(if year < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// The Thursday of the Monday-based week containing `date`.
pub fn week_thursday(date: NaiveDate) -> NaiveDate {
    shift_days(date, 4 - iso_weekday(date))
}

/// The first Thursday of `year`, i.e. the Thursday of its week 1.
pub fn first_thursday(year: i32) -> NaiveDate {
    let new_year = january_first(year);
    shift_days(new_year, (4 - iso_weekday(new_year)).rem_euclid(DAYS_PER_WEEK))
}

/// The ISO-8601 week number (1..=53) of `date`.
pub fn week_number(date: NaiveDate) -> u32 {
    // Day count from January 1 of the Thursday's year, inclusive, in whole weeks rounded up.
    week_thursday(date).ordinal().div_ceil(7)
}

/// The number of the week containing `date`, counted from week 1 of `year`.
///
/// Equal to [`week_number`] whenever the week's Thursday lies in `year`.
pub fn local_week_number(date: NaiveDate, year: i32) -> i64 {
    let days = (week_thursday(date) - first_thursday(year)).num_days();
    days.div_euclid(DAYS_PER_WEEK) + 1
}

/// A numbered week of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarWeek {
    year: i32,
    week: u32,
}

impl CalendarWeek {
    /// Any pair is accepted; weeks past the end of the year roll into the next.
    pub fn from_parts(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// The week containing `date`, numbered within the date's calendar year.
    pub fn from_date(date: NaiveDate) -> Self {
        let week = local_week_number(date, date.year());
        Self::from_parts(date.year(), u32::try_from(week).unwrap_or(0))
    }

    /// The strict ISO week of `date`; its year may differ from the date's.
    pub fn iso_from_date(date: NaiveDate) -> Self {
        Self::from_parts(week_thursday(date).year(), week_number(date))
    }

    /// Reads a `YYYY-Www` literal with a week number in 0..=53.
    ///
    /// Week `00` is the label [`CalendarWeek::from_date`] gives early-January
    /// days that belong to the previous ISO year.
    pub fn from_iso_string(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidWeek(s.to_string());
        let (year, week) = s.split_once("-W").ok_or_else(invalid)?;
        if year.len() != 4 || week.len() != 2 {
            return Err(invalid());
        }
        let year = parse_digits(year).ok_or_else(invalid)?;
        let week = parse_digits(week).ok_or_else(invalid)?;
        if week > 53 {
            return Err(invalid());
        }
        Ok(Self::from_parts(year as i32, week))
    }

    /// Reads a `YYYY-MM-DD` literal and takes the week containing it.
    pub fn from_calendar_date(s: &str) -> Result<Self> {
        let date = parse_calendar_date(s)?;
        Ok(Self::from_date(date))
    }

    /// Reads either week literal form.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_iso_string(s)
            .or_else(|_| Self::from_calendar_date(s))
            .map_err(|_| Error::InvalidWeek(s.to_string()))
    }

    /// Builds a week from a JSON value: a literal string or `{"year", "week"}`.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Self::parse(s),
            serde_json::Value::Object(map) => {
                let year = map.get("year").and_then(serde_json::Value::as_i64);
                let week = map.get("week").and_then(serde_json::Value::as_u64);
                match (year, week) {
                    (Some(year), Some(week)) => {
                        let year = i32::try_from(year).map_err(|_| Error::InvalidArguments(value.to_string()))?;
                        let week = u32::try_from(week).map_err(|_| Error::InvalidArguments(value.to_string()))?;
                        Ok(Self::from_parts(year, week))
                    }
                    _ => Err(Error::InvalidArguments(value.to_string())),
                }
            }
            other => Err(Error::InvalidArguments(other.to_string())),
        }
    }

    /// The week that contains today on `clock`.
    pub fn current(clock: &impl Clock) -> Self {
        Self::from_date(clock.today())
    }

    /// Parses `s`, using the current week when it cannot be read.
    pub fn parse_or_current(s: &str, clock: &impl Clock) -> Self {
        Self::parse(s).unwrap_or_else(|e| {
            tracing::warn!(literal = s, error = %e, "falling back to the current week");
            Self::current(clock)
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    /// Thursday of the week: the year's first Thursday plus `week - 1` weeks.
    pub fn thursday(&self) -> NaiveDate {
        let offset = (i64::from(self.week) - 1) * DAYS_PER_WEEK;
        shift_days(first_thursday(self.year), offset)
    }

    pub fn monday(&self) -> NaiveDate {
        shift_days(self.thursday(), -3)
    }

    pub fn friday(&self) -> NaiveDate {
        shift_days(self.thursday(), 1)
    }

    pub fn sunday(&self) -> NaiveDate {
        shift_days(self.thursday(), 3)
    }

    /// Monday through Friday.
    pub fn days(&self) -> Vec<NaiveDate> {
        let monday = self.monday();
        (0..5).map(|offset| shift_days(monday, offset)).collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday() <= date && date <= self.sunday()
    }

    /// A sensible default day for new entries in this week.
    ///
    /// Monday if today is before the week, Friday if today is past Friday,
    /// otherwise today.
    pub fn closest_to_today(&self, clock: &impl Clock) -> NaiveDate {
        let today = clock.today();
        let monday = self.monday();
        if today < monday {
            return monday;
        }
        let friday = self.friday();
        if today < friday {
            today
        } else {
            friday
        }
    }

    /// `YYYY-Www` with a four digit year and two digit week.
    pub fn to_label(&self) -> String {
        self.to_string()
    }

    pub fn next(&self) -> Self {
        Self::from_date(shift_days(self.thursday(), DAYS_PER_WEEK))
    }

    pub fn previous(&self) -> Self {
        Self::from_date(shift_days(self.thursday(), -DAYS_PER_WEEK))
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Reads a strict `YYYY-MM-DD` date.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate(s.to_string());
    let mut parts = s.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }
    let year = parse_digits(year).ok_or_else(invalid)?;
    let month = parse_digits(month).ok_or_else(invalid)?;
    let day = parse_digits(day).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)
}

impl fmt::Display for CalendarWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl Serialize for CalendarWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
