//! Work records, work weeks and projects.
//!
//! These are the JSON entities exchanged with the storage layer. The engine
//! only reads them; every helper here returns new values.

use super::clock::Clock;
use super::period::{IntervalPeriod, Period};
use super::week::CalendarWeek;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One entry of recorded work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Unique within its week.
    pub id: u32,
    pub date: NaiveDate,
    /// Id of the [`Project`] the work was done for.
    pub project: String,
    pub period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl WorkRecord {
    /// A fresh entry for `week`: dated on the week's day closest to today,
    /// with an interval starting now.
    pub fn new_in_week(id: u32, week: &CalendarWeek, project: &str, clock: &impl Clock) -> Self {
        Self {
            id,
            date: week.closest_to_today(clock),
            project: project.to_string(),
            period: Period::Interval(IntervalPeriod::starting_now(clock)),
            comment: None,
        }
    }

    /// Sets the comment, treating an empty string as no comment.
    pub fn with_comment(self, comment: &str) -> Self {
        Self {
            comment: (!comment.is_empty()).then(|| comment.to_string()),
            ..self
        }
    }
}

/// Orders records by date, then id.
pub fn compare_work(a: &WorkRecord, b: &WorkRecord) -> Ordering {
    a.date.cmp(&b.date).then(a.id.cmp(&b.id))
}

pub fn sort_work(records: &mut [WorkRecord]) {
    records.sort_by(compare_work);
}

/// The id for the next record: one past the largest id, or 1.
pub fn next_id(records: &[WorkRecord]) -> u32 {
    records.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

/// All work recorded in one week, with an optional week comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWeek {
    pub week: CalendarWeek,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub work: Vec<WorkRecord>,
}

impl WorkWeek {
    pub fn new(week: CalendarWeek) -> Self {
        Self { week, comment: None, work: Vec::new() }
    }

    /// Records in (date, id) order.
    pub fn sorted_work(&self) -> Vec<WorkRecord> {
        let mut work = self.work.clone();
        sort_work(&mut work);
        work
    }
}

/// Sorts weeks by label and drops duplicates of the same week.
pub fn sort_work_weeks(weeks: &mut Vec<WorkWeek>) {
    weeks.sort_by(|a, b| a.week.to_label().cmp(&b.week.to_label()));
    weeks.dedup_by(|a, b| a.week == b.week);
}

/// A billing code of a project, optionally limited to a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobNumber {
    pub job_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl JobNumber {
    /// Whether the date range is usable.
    ///
    /// Without an end the start must be a date; an end needs a start at or
    /// before it. Dates compare as `YYYY-MM-DD` text.
    pub fn dates_ok(&self) -> bool {
        match (&self.start_date, &self.end_date) {
            (start, None) => start.as_deref().map_or(true, looks_like_date),
            (None, Some(_)) => false,
            (Some(start), Some(end)) => start <= end,
        }
    }

    /// Whether this job number appears exactly once in `all`.
    pub fn is_unique_in(&self, all: &[JobNumber]) -> bool {
        all.iter().filter(|j| j.job_number == self.job_number).count() == 1
    }
}

fn looks_like_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9].iter().all(|&i| b[i].is_ascii_digit())
}

/// Something work is booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub job_numbers: Vec<JobNumber>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_chargeable: bool,
}

fn default_true() -> bool {
    true
}

impl Project {
    pub fn new(project_id: &str, name: &str, is_chargeable: bool) -> Self {
        Self {
            project_id: project_id.to_string(),
            name: name.to_string(),
            job_numbers: Vec::new(),
            is_active: true,
            is_chargeable,
        }
    }

    /// A new project needs a non-empty id and name, neither used by `existing`.
    pub fn is_valid_new(&self, existing: &[Project]) -> bool {
        let non_empty = !self.project_id.is_empty() && !self.name.is_empty();
        let unique = !existing
            .iter()
            .any(|p| p.name == self.name || p.project_id == self.project_id);
        non_empty && unique
    }

    /// Every job number is unique and has a usable date range.
    pub fn job_numbers_ok(&self) -> bool {
        self.job_numbers
            .iter()
            .all(|j| j.is_unique_in(&self.job_numbers) && j.dates_ok())
    }
}
