use crate::{
    libs::{
        clock::SystemClock,
        config::Config,
        export::{ExportFormat, Exporter},
        input::{read_all_work_weeks, read_projects},
        messages::Message,
        month::CalendarMonth,
        summary::{MonthTable, WeekTable},
        work::WorkWeek,
    },
    msg_error_anyhow,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// JSON files with the work weeks to export
    #[arg(long, num_args = 1.., required = true)]
    work: Vec<PathBuf>,

    /// JSON file with the project list
    #[arg(long)]
    projects: PathBuf,

    /// Export the month table of `YYYY-MM` instead of a single week table
    #[arg(long)]
    month: Option<String>,

    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include the days of every week in a CSV month export
    #[arg(long)]
    days: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let clock = SystemClock;
    let projects = read_projects(&args.projects)?;
    let work_weeks = read_all_work_weeks(&args.work)?;
    let exporter = Exporter::new(args.format, args.output);

    match args.month.as_deref() {
        Some(literal) => {
            let month = CalendarMonth::parse_or_current(literal, &clock);
            exporter.export_month(&MonthTable::build(&work_weeks, &projects, month, &clock), args.days)
        }
        None => {
            let work_week = single_week(&work_weeks)?;
            let include_inactive = Config::read()?.summary().include_inactive_projects;
            exporter.export_week(&WeekTable::build(work_week, &projects, include_inactive, &clock))
        }
    }
}

/// The only work week of a week export.
fn single_week(work_weeks: &[WorkWeek]) -> Result<&WorkWeek> {
    match work_weeks {
        [work_week] => Ok(work_week),
        _ => Err(msg_error_anyhow!(Message::ExportNeedsMonth(work_weeks.len()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::week::CalendarWeek;

    #[test]
    fn test_single_week_required_without_month() {
        let one = vec![WorkWeek::new(CalendarWeek::from_parts(2024, 9))];
        assert_eq!(single_week(&one).unwrap().week.to_label(), "2024-W09");

        let two = vec![one[0].clone(), WorkWeek::new(CalendarWeek::from_parts(2024, 10))];
        let error = single_week(&two).unwrap_err();
        assert_eq!(error.to_string(), "Found 2 work weeks, pass --month to export a month table");
        assert!(single_week(&[]).is_err());
    }
}
