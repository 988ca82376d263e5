use crate::{
    libs::{clock::SystemClock, messages::Message, week::CalendarWeek},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// `YYYY-Www` or a `YYYY-MM-DD` date inside the week; the current week when omitted
    literal: Option<String>,
}

pub fn cmd(args: WeekArgs) -> Result<()> {
    let clock = SystemClock;
    let week = match args.literal.as_deref() {
        Some(literal) => CalendarWeek::parse_or_current(literal, &clock),
        None => CalendarWeek::current(&clock),
    };

    msg_print!(Message::WeekHeader(week.to_label()), true);
    msg_print!(Message::WeekIsoLabel(CalendarWeek::iso_from_date(week.thursday()).to_label()));
    msg_print!(Message::WeekDays(
        week.monday().to_string(),
        week.thursday().to_string(),
        week.friday().to_string()
    ));
    msg_print!(Message::WeekClosestDay(week.closest_to_today(&clock).to_string()));
    Ok(())
}
