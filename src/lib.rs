//! # Workweek - Calendar and duration arithmetic for time tracking
//!
//! Turns weekly work records into day, week and month totals.
//!
//! ## Features
//!
//! - **Durations**: normalized hours and minutes with `H:MM` text form
//! - **Calendar**: ISO weeks and months with their spanned weeks
//! - **Periods**: fixed durations or start/end/pause intervals
//! - **Aggregation**: predicate sums and per-day, per-week, per-project groupings
//! - **Overviews**: week and month tables, chargeable split, CSV/JSON export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use workweek::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
