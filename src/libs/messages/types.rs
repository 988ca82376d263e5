/// Every user-facing text the application prints.
///
/// Variants carry already-formatted values (labels, durations, paths) so
/// the `Display` implementation only arranges words around them.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigTargetHours(i64),

    // === CALENDAR MESSAGES ===
    WeekHeader(String),               // week label
    WeekIsoLabel(String),             // strict ISO label
    WeekDays(String, String, String), // monday, thursday, friday
    WeekClosestDay(String),           // date
    MonthHeader(String),              // month label
    MonthRange(String, String),       // first day, last day
    MonthWeeks(usize),                // spanned week count

    // === OVERVIEW MESSAGES ===
    WeekOverviewTitle(String),  // week label
    WeekComment(String),        // comment
    WeekSummaryTitle,
    WeekTargetMet(String),      // target
    WeekTargetMissed(String),   // target
    MonthOverviewTitle(String), // month label
    NoWorkForWeek(String),      // week label
    NoWorkForMonth(String),     // month label
    OpenIntervalsEvaluated(usize),

    // === INPUT MESSAGES ===
    InputFileRead(String, usize), // path, work weeks
    InputFileInvalid(String),     // path

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportNeedsMonth(usize), // work weeks
    ExportWritten,
}
