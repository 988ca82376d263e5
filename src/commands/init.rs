//! Writes the configuration file with the summary settings.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Hours expected per day worked
    #[arg(long)]
    target_hours: Option<i64>,

    /// Show inactive projects in week tables
    #[arg(long)]
    include_inactive: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let mut config = Config::read()?;
    let mut summary = config.summary.take().unwrap_or_default();
    if let Some(hours) = init_args.target_hours {
        summary.daily_target_hours = hours;
    }
    if init_args.include_inactive {
        summary.include_inactive_projects = true;
    }
    let hours = summary.daily_target_hours;
    config.summary = Some(summary);
    config.save()?;

    msg_success!(Message::ConfigSaved);
    msg_info!(Message::ConfigTargetHours(hours));
    Ok(())
}
