use crate::{
    libs::{clock::SystemClock, messages::Message, month::CalendarMonth, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// `YYYY-MM`; the current month when omitted
    literal: Option<String>,
}

pub fn cmd(args: MonthArgs) -> Result<()> {
    let clock = SystemClock;
    let month = match args.literal.as_deref() {
        Some(literal) => CalendarMonth::parse_or_current(literal, &clock),
        None => CalendarMonth::current(&clock),
    };

    msg_print!(Message::MonthHeader(month.to_label()), true);
    msg_print!(Message::MonthRange(month.first_day().to_string(), month.last_day().to_string()));
    let weeks = month.spanned_weeks();
    msg_print!(Message::MonthWeeks(weeks.len()));
    View::weeks(&weeks)?;
    Ok(())
}
