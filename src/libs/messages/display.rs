//! Display implementation for application messages.
//!
//! All message text is defined here, in one match, so the wording stays
//! consistent across commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigTargetHours(hours) => format!("Daily target: {} hours", hours),

            // === CALENDAR MESSAGES ===
            Message::WeekHeader(label) => format!("Week {}", label),
            Message::WeekIsoLabel(label) => format!("ISO week: {}", label),
            Message::WeekDays(monday, thursday, friday) => {
                format!("Monday: {}\nThursday: {}\nFriday: {}", monday, thursday, friday)
            }
            Message::WeekClosestDay(date) => format!("Default day for new entries: {}", date),
            Message::MonthHeader(label) => format!("Month {}", label),
            Message::MonthRange(first, last) => format!("From {} to {}", first, last),
            Message::MonthWeeks(count) => format!("Spans {} week(s):", count),

            // === OVERVIEW MESSAGES ===
            Message::WeekOverviewTitle(label) => format!("Work for week {}", label),
            Message::WeekComment(comment) => format!("Week comment: {}", comment),
            Message::WeekSummaryTitle => "Summary".to_string(),
            Message::WeekTargetMet(target) => format!("Target of {} reached", target),
            Message::WeekTargetMissed(target) => format!("Target of {} not reached", target),
            Message::MonthOverviewTitle(label) => format!("Month overview for {}", label),
            Message::NoWorkForWeek(label) => format!("No work recorded for week {}", label),
            Message::NoWorkForMonth(label) => format!("No work recorded for month {}", label),
            Message::OpenIntervalsEvaluated(count) => {
                format!("{} open interval(s) counted up to the current time", count)
            }

            // === INPUT MESSAGES ===
            Message::InputFileRead(path, count) => format!("Read {} work week(s) from {}", count, path),
            Message::InputFileInvalid(path) => format!("Could not read work data from {}", path),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportNeedsMonth(count) => {
                format!("Found {} work weeks, pass --month to export a month table", count)
            }
            Message::ExportWritten => "Export written to standard output".to_string(),
        };

        write!(f, "{}", text)
    }
}
