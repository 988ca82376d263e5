//! Week and month overviews built from work records.
//!
//! The tables here are plain data: one row per day or week, one column per
//! project, every cell a [`Duration`]. Rendering and export live in
//! `view` and `export`.

use super::aggregate::{both, chargeable, days, for_project, in_month, on_day, projects_in_use, sum, Aggregate, ProjectIndex};
use super::clock::Clock;
use super::duration::Duration;
use super::month::CalendarMonth;
use super::week::CalendarWeek;
use super::work::{sort_work_weeks, Project, WorkRecord, WorkWeek};
use chrono::NaiveDate;
use serde::Serialize;

/// Totals of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    /// `"<project name>:<comment>"` for every commented record of the day.
    pub comments: Vec<String>,
    pub total: Duration,
    /// One entry per table project, in column order.
    pub per_project: Vec<Duration>,
}

impl DayRow {
    fn build<'a, I>(date: NaiveDate, records: I, columns: &[Project], index: &ProjectIndex, clock: &impl Clock) -> Self
    where
        I: IntoIterator<Item = &'a WorkRecord> + Clone,
    {
        let comments = records
            .clone()
            .into_iter()
            .filter(|record| record.date == date)
            .filter_map(|record| {
                record
                    .comment
                    .as_ref()
                    .map(|comment| format!("{}:{}", index.name(&record.project), comment))
            })
            .collect();
        let per_project = columns
            .iter()
            .map(|project| sum(records.clone(), both(on_day(date), for_project(&project.project_id)), clock))
            .collect();
        Self {
            date,
            comments,
            total: sum(records, on_day(date), clock),
            per_project,
        }
    }
}

/// Day by project totals of one work week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekTable {
    pub week: CalendarWeek,
    pub comment: Option<String>,
    pub projects: Vec<Project>,
    pub rows: Vec<DayRow>,
    /// Whole-week total per project column.
    pub totals: Vec<Duration>,
    pub total: Duration,
}

impl WeekTable {
    /// Builds the table with one column per active project, sorted by name.
    ///
    /// With `include_inactive` every project gets a column.
    pub fn build(work_week: &WorkWeek, projects: &[Project], include_inactive: bool, clock: &impl Clock) -> Self {
        let mut columns: Vec<Project> = projects
            .iter()
            .filter(|project| include_inactive || project.is_active)
            .cloned()
            .collect();
        columns.sort_by(|a, b| a.name.cmp(&b.name));

        let index = ProjectIndex::new(projects);
        let records = &work_week.work;
        let rows = days(records)
            .into_iter()
            .map(|date| DayRow::build(date, records, &columns, &index, clock))
            .collect();
        let totals = columns
            .iter()
            .map(|project| sum(records, for_project(&project.project_id), clock))
            .collect();

        Self {
            week: work_week.week,
            comment: work_week.comment.clone(),
            projects: columns,
            rows,
            totals,
            total: records.total_time(clock),
        }
    }
}

/// Chargeable split of a week and whether the daily target was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    pub chargeable: Duration,
    pub non_chargeable: Duration,
    pub total: Duration,
    /// Distinct dates with at least one record.
    pub days_worked: usize,
    /// `daily_target_hours` for every day worked.
    pub target: Duration,
    pub target_met: bool,
}

impl WeekSummary {
    /// Records on projects missing from `projects` count as non-chargeable.
    pub fn build(records: &[WorkRecord], projects: &[Project], daily_target_hours: i64, clock: &impl Clock) -> Self {
        let index = ProjectIndex::new(projects);
        let total = records.total_time(clock);
        let days_worked = days(records).len();
        let target_hours = daily_target_hours * days_worked as i64;
        Self {
            chargeable: records.sum_where(chargeable(&index, true), clock),
            non_chargeable: records.sum_where(chargeable(&index, false), clock),
            total,
            days_worked,
            target: Duration::make(target_hours, 0),
            target_met: total.hours() >= target_hours,
        }
    }
}

/// Totals of one week, limited to the days inside the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthWeekRow {
    pub week: CalendarWeek,
    pub total: Duration,
    pub per_project: Vec<Duration>,
    pub days: Vec<DayRow>,
}

/// Week by project totals of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTable {
    pub month: CalendarMonth,
    pub projects: Vec<Project>,
    pub weeks: Vec<MonthWeekRow>,
    pub totals: Vec<Duration>,
    pub total: Duration,
}

impl MonthTable {
    /// Builds the table from the work weeks spanning `month`.
    ///
    /// Weeks are ordered by label and duplicates dropped. Only records dated
    /// inside the month are counted, so the edge weeks contribute their
    /// in-month days only. Columns are the projects used anywhere in the
    /// given weeks, sorted by name.
    pub fn build(work_weeks: &[WorkWeek], projects: &[Project], month: CalendarMonth, clock: &impl Clock) -> Self {
        let mut work_weeks = work_weeks.to_vec();
        sort_work_weeks(&mut work_weeks);

        let all_records: Vec<&WorkRecord> = work_weeks.iter().flat_map(|w| w.work.iter()).collect();
        let columns = projects_in_use(projects, all_records.iter().copied());
        let index = ProjectIndex::new(projects);

        let weeks = work_weeks
            .iter()
            .map(|work_week| {
                let in_month_records: Vec<&WorkRecord> =
                    work_week.work.iter().filter(|r| month.contains(r.date)).collect();
                let records = in_month_records.iter().copied();
                MonthWeekRow {
                    week: work_week.week,
                    total: sum(records.clone(), in_month(month), clock),
                    per_project: columns
                        .iter()
                        .map(|project| sum(records.clone(), for_project(&project.project_id), clock))
                        .collect(),
                    days: days(records.clone())
                        .into_iter()
                        .map(|date| DayRow::build(date, records.clone(), &columns, &index, clock))
                        .collect(),
                }
            })
            .collect();

        let month_records = all_records.iter().copied();
        let totals = columns
            .iter()
            .map(|project| sum(month_records.clone(), both(in_month(month), for_project(&project.project_id)), clock))
            .collect();

        Self {
            month,
            projects: columns,
            weeks,
            totals,
            total: sum(month_records, in_month(month), clock),
        }
    }
}
