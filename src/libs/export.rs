//! Export of week and month tables to CSV or JSON.
//!
//! CSV exports write the same cells the console view shows, header row
//! first and the totals row last. JSON exports serialize the table
//! structures directly, durations as `"H:MM"` strings.
//!
//! ```rust,no_run
//! use workweek::libs::clock::SystemClock;
//! use workweek::libs::export::{ExportFormat, Exporter};
//! use workweek::libs::month::CalendarMonth;
//! use workweek::libs::summary::MonthTable;
//!
//! let clock = SystemClock;
//! let table = MonthTable::build(&[], &[], CalendarMonth::current(&clock), &clock);
//! Exporter::new(ExportFormat::Csv, Some("march.csv".into())).export_month(&table, true)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::summary::{MonthTable, WeekTable};
use super::view::TextTable;
use crate::{libs::messages::Message, msg_success};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// One row per day or week, totals last.
    Csv,
    /// The table structure, pretty-printed.
    Json,
}

/// Writes tables to a file, or to standard output when no path is given.
pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn export_week(&self, table: &WeekTable) -> Result<()> {
        self.export(table, &TextTable::week(table))
    }

    /// `with_days` adds the per-day rows under each week in CSV output.
    pub fn export_month(&self, table: &MonthTable, with_days: bool) -> Result<()> {
        self.export(table, &TextTable::month(table, with_days))
    }

    fn export<T: Serialize>(&self, table: &T, text: &TextTable) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
                self.write_to(file, table, text)?;
                msg_success!(Message::ExportCompleted(path.display().to_string()));
            }
            None => {
                self.write_to(io::stdout().lock(), table, text)?;
                tracing::debug!("{}", Message::ExportWritten);
            }
        }
        Ok(())
    }

    /// Writes `table` in the configured format.
    pub fn write_to<W: Write, T: Serialize>(&self, writer: W, table: &T, text: &TextTable) -> Result<()> {
        match self.format {
            ExportFormat::Csv => write_csv(writer, text),
            ExportFormat::Json => write_json(writer, table),
        }
    }
}

fn write_csv<W: Write>(writer: W, text: &TextTable) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in text.all_rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(mut writer: W, table: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, table)?;
    writeln!(writer)?;
    Ok(())
}
