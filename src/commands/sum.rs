use crate::{
    libs::{
        clock::SystemClock,
        input::{read_all_work_weeks, read_projects},
        messages::Message,
        month::CalendarMonth,
        summary::MonthTable,
        view::View,
    },
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// JSON files with the work weeks spanning the month
    #[arg(long, num_args = 1.., required = true)]
    work: Vec<PathBuf>,

    /// JSON file with the project list
    #[arg(long)]
    projects: PathBuf,

    /// `YYYY-MM`; the current month when omitted
    #[arg(long)]
    month: Option<String>,

    /// Show the days of every week
    #[arg(long)]
    days: bool,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let clock = SystemClock;
    let month = match args.month.as_deref() {
        Some(literal) => CalendarMonth::parse_or_current(literal, &clock),
        None => CalendarMonth::current(&clock),
    };
    let projects = read_projects(&args.projects)?;
    let work_weeks = read_all_work_weeks(&args.work)?;

    let table = MonthTable::build(&work_weeks, &projects, month, &clock);
    if table.weeks.iter().all(|week| week.days.is_empty()) {
        msg_warning!(Message::NoWorkForMonth(month.to_label()));
        return Ok(());
    }

    msg_print!(Message::MonthOverviewTitle(month.to_label()), true);
    View::month_table(&table, args.days)?;
    Ok(())
}
