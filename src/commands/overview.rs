use crate::{
    libs::{
        clock::SystemClock,
        config::Config,
        input::{read_projects, read_work_weeks},
        messages::Message,
        summary::{WeekSummary, WeekTable},
        view::View,
    },
    msg_debug, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OverviewArgs {
    /// JSON file with the work week
    #[arg(long)]
    work: PathBuf,

    /// JSON file with the project list
    #[arg(long)]
    projects: PathBuf,
}

pub fn cmd(args: OverviewArgs) -> Result<()> {
    let clock = SystemClock;
    let settings = Config::read()?.summary();
    let projects = read_projects(&args.projects)?;
    let work_week = read_work_weeks(&args.work)?
        .into_iter()
        .next()
        .with_context(|| Message::InputFileInvalid(args.work.display().to_string()))?;

    let label = work_week.week.to_label();
    if work_week.work.is_empty() {
        msg_warning!(Message::NoWorkForWeek(label));
        return Ok(());
    }

    let open = work_week.work.iter().filter(|record| record.period.is_open()).count();
    if open > 0 {
        msg_debug!(Message::OpenIntervalsEvaluated(open));
    }

    msg_print!(Message::WeekOverviewTitle(label), true);
    if let Some(comment) = &work_week.comment {
        msg_print!(Message::WeekComment(comment.clone()));
    }
    let table = WeekTable::build(&work_week, &projects, settings.include_inactive_projects, &clock);
    View::week_table(&table)?;

    msg_print!(Message::WeekSummaryTitle, true);
    let summary = WeekSummary::build(&work_week.work, &projects, settings.daily_target_hours, &clock);
    View::week_summary(&summary)?;
    if summary.target_met {
        msg_success!(Message::WeekTargetMet(summary.target.to_string()));
    } else {
        msg_info!(Message::WeekTargetMissed(summary.target.to_string()));
    }
    Ok(())
}
