//! Sums of elapsed time over work records.
//!
//! Every figure the views display is one reduction: the totals of all
//! records matching a predicate, added up with [`Duration::add`] starting
//! from `0:00`. Because addition of normalized durations is associative and
//! commutative, the order of the records does not matter.
//!
//! ## Predicates
//!
//! The functions in this module build closures over `&WorkRecord`:
//!
//! - [`all`]: every record
//! - [`on_day`]: records dated on one day
//! - [`in_week`] / [`in_month`]: records whose date falls in a week or month
//! - [`for_project`]: records booked on one project
//! - [`chargeable`]: records on chargeable (or non-chargeable) projects
//! - [`both`]: the conjunction of two predicates
//!
//! ```rust
//! use workweek::libs::aggregate::{for_project, sum};
//! use workweek::libs::clock::SystemClock;
//! use workweek::libs::work::WorkRecord;
//!
//! let records: Vec<WorkRecord> = Vec::new();
//! let total = sum(&records, for_project("p1"), &SystemClock);
//! assert_eq!(total.to_string(), "0:00");
//! ```

use super::clock::Clock;
use super::duration::Duration;
use super::month::CalendarMonth;
use super::work::{Project, WorkRecord};
use super::week::CalendarWeek;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sums the elapsed time of every record matching `predicate`.
pub fn sum<'a, I, P>(records: I, predicate: P, clock: &impl Clock) -> Duration
where
    I: IntoIterator<Item = &'a WorkRecord>,
    P: Fn(&WorkRecord) -> bool,
{
    records
        .into_iter()
        .filter(|record| predicate(*record))
        .map(|record| record.period.total_time(clock))
        .fold(Duration::zero(), Duration::add)
}

pub fn all() -> impl Fn(&WorkRecord) -> bool {
    |_| true
}

pub fn on_day(date: NaiveDate) -> impl Fn(&WorkRecord) -> bool {
    move |record| record.date == date
}

pub fn in_week(week: CalendarWeek) -> impl Fn(&WorkRecord) -> bool {
    move |record| week.contains(record.date)
}

pub fn in_month(month: CalendarMonth) -> impl Fn(&WorkRecord) -> bool {
    move |record| month.contains(record.date)
}

pub fn for_project(project_id: &str) -> impl Fn(&WorkRecord) -> bool + '_ {
    move |record| record.project == project_id
}

/// Records whose project's chargeable flag equals `wanted`.
///
/// Records on projects missing from `index` count as non-chargeable.
pub fn chargeable<'a>(index: &'a ProjectIndex<'a>, wanted: bool) -> impl Fn(&WorkRecord) -> bool + 'a {
    move |record| index.is_chargeable(&record.project) == wanted
}

pub fn both<A, B>(a: A, b: B) -> impl Fn(&WorkRecord) -> bool
where
    A: Fn(&WorkRecord) -> bool,
    B: Fn(&WorkRecord) -> bool,
{
    move |record| a(record) && b(record)
}

/// Distinct record dates in ascending order.
pub fn days<'a, I>(records: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    records
        .into_iter()
        .map(|record| record.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Total per date.
pub fn by_day<'a, I>(records: I, clock: &impl Clock) -> BTreeMap<NaiveDate, Duration>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    group_by(records, |record| record.date, clock)
}

/// Total per week, weeks numbered within each date's calendar year.
pub fn by_week<'a, I>(records: I, clock: &impl Clock) -> BTreeMap<CalendarWeek, Duration>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    group_by(records, |record| CalendarWeek::from_date(record.date), clock)
}

/// Total per project id.
pub fn by_project<'a, I>(records: I, clock: &impl Clock) -> BTreeMap<String, Duration>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    group_by(records, |record| record.project.clone(), clock)
}

fn group_by<'a, I, K, F>(records: I, key: F, clock: &impl Clock) -> BTreeMap<K, Duration>
where
    I: IntoIterator<Item = &'a WorkRecord>,
    K: Ord,
    F: Fn(&WorkRecord) -> K,
{
    let mut groups = BTreeMap::new();
    for record in records {
        let total = groups.entry(key(record)).or_insert_with(Duration::zero);
        *total = total.add(record.period.total_time(clock));
    }
    groups
}

/// Projects referenced by at least one record, sorted by name.
pub fn projects_in_use<'a, I>(projects: &[Project], records: I) -> Vec<Project>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    let used: BTreeSet<&str> = records.into_iter().map(|record| record.project.as_str()).collect();
    let mut in_use: Vec<Project> = projects
        .iter()
        .filter(|project| used.contains(project.project_id.as_str()))
        .cloned()
        .collect();
    in_use.sort_by(|a, b| a.name.cmp(&b.name));
    in_use
}

/// Lookup of projects by id.
#[derive(Debug, Clone, Default)]
pub struct ProjectIndex<'a> {
    by_id: HashMap<&'a str, &'a Project>,
}

impl<'a> ProjectIndex<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            by_id: projects.iter().map(|p| (p.project_id.as_str(), p)).collect(),
        }
    }

    pub fn get(&self, project_id: &str) -> Option<&'a Project> {
        self.by_id.get(project_id).copied()
    }

    pub fn is_chargeable(&self, project_id: &str) -> bool {
        self.get(project_id).is_some_and(|p| p.is_chargeable)
    }

    /// The project's name, or an empty string for unknown ids.
    pub fn name(&self, project_id: &str) -> &'a str {
        self.get(project_id).map_or("", |p| p.name.as_str())
    }
}

/// Aggregation methods on record collections.
pub trait Aggregate {
    fn sum_where<P>(&self, predicate: P, clock: &impl Clock) -> Duration
    where
        P: Fn(&WorkRecord) -> bool;

    fn total_time(&self, clock: &impl Clock) -> Duration {
        self.sum_where(all(), clock)
    }
}

impl Aggregate for [WorkRecord] {
    fn sum_where<P>(&self, predicate: P, clock: &impl Clock) -> Duration
    where
        P: Fn(&WorkRecord) -> bool,
    {
        sum(self, predicate, clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::clock::FixedClock;
    use crate::libs::period::Period;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn t(h: i64, m: i64) -> Duration {
        Duration::make(h, m)
    }

    fn clock() -> FixedClock {
        FixedClock::at(date(2024, 3, 6), 15, 0)
    }

    fn record(id: u32, day: NaiveDate, project: &str, period: Period) -> WorkRecord {
        WorkRecord { id, date: day, project: project.to_string(), period, comment: None }
    }

    fn sample() -> Vec<WorkRecord> {
        vec![
            record(1, date(2024, 2, 29), "alpha", Period::absolute(t(2, 45))),
            record(2, date(2024, 3, 1), "alpha", Period::interval(t(9, 0), Some(t(12, 30)), None)),
            record(3, date(2024, 3, 1), "beta", Period::interval(t(13, 0), Some(t(17, 15)), Some(t(0, 30)))),
            record(4, date(2024, 3, 6), "gamma", Period::interval(t(13, 20), None, None)),
        ]
    }

    fn projects() -> Vec<Project> {
        vec![Project::new("alpha", "Alpha", true), Project::new("beta", "Beta", false)]
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let none: Vec<WorkRecord> = Vec::new();
        assert_eq!(sum(&none, all(), &clock()), Duration::zero());
        assert_eq!(sum(&none, for_project("alpha"), &clock()), Duration::zero());
        assert_eq!(none.total_time(&clock()), Duration::zero());
    }

    #[test]
    fn test_total_includes_open_interval() {
        // 2:45 + 3:30 + 3:45 + 1:40
        assert_eq!(sample().total_time(&clock()), t(11, 40));
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut records = sample();
        let forward = records.total_time(&clock());
        records.reverse();
        assert_eq!(records.total_time(&clock()), forward);
    }

    #[test]
    fn test_day_and_month_filters() {
        let records = sample();
        assert_eq!(sum(&records, on_day(date(2024, 3, 1)), &clock()), t(7, 15));
        assert_eq!(sum(&records, in_month(CalendarMonth::from_parts(2024, 2)), &clock()), t(2, 45));
        assert_eq!(sum(&records, in_month(CalendarMonth::from_parts(2024, 3)), &clock()), t(8, 55));
        assert_eq!(sum(&records, in_week(CalendarWeek::from_parts(2024, 9)), &clock()), t(10, 0));
    }

    #[test]
    fn test_chargeable_split() {
        let records = sample();
        let projects = projects();
        let index = ProjectIndex::new(&projects);
        let billable = records.sum_where(chargeable(&index, true), &clock());
        let other = records.sum_where(chargeable(&index, false), &clock());
        assert_eq!(billable, t(6, 15));
        // Beta plus the unknown gamma project.
        assert_eq!(other, t(5, 25));
        assert_eq!(billable + other, records.total_time(&clock()));
    }

    #[test]
    fn test_combined_predicates() {
        let records = sample();
        let march_alpha = both(in_month(CalendarMonth::from_parts(2024, 3)), for_project("alpha"));
        assert_eq!(sum(&records, march_alpha, &clock()), t(3, 30));
    }

    #[test]
    fn test_groupings() {
        let records = sample();
        assert_eq!(days(&records), vec![date(2024, 2, 29), date(2024, 3, 1), date(2024, 3, 6)]);

        let per_day = by_day(&records, &clock());
        assert_eq!(per_day[&date(2024, 3, 1)], t(7, 15));

        let per_project = by_project(&records, &clock());
        assert_eq!(per_project["alpha"], t(6, 15));
        assert_eq!(per_project.len(), 3);

        let per_week = by_week(&records, &clock());
        assert_eq!(per_week[&CalendarWeek::from_parts(2024, 9)], t(10, 0));
        assert_eq!(per_week[&CalendarWeek::from_parts(2024, 10)], t(1, 40));

        let total: Duration = per_day.values().sum();
        assert_eq!(total, records.total_time(&clock()));
    }

    #[test]
    fn test_projects_in_use_sorted_by_name() {
        let records = sample();
        let mut projects = projects();
        projects.push(Project::new("delta", "Delta", true));
        projects.reverse();
        let names: Vec<String> = projects_in_use(&projects, &records).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_project_index() {
        let projects = projects();
        let index = ProjectIndex::new(&projects);
        assert_eq!(index.name("beta"), "Beta");
        assert_eq!(index.name("nope"), "");
        assert!(index.is_chargeable("alpha"));
        assert!(!index.is_chargeable("nope"));
    }
}
