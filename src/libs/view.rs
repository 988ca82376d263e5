use super::summary::{DayRow, MonthTable, WeekSummary, WeekTable};
use super::week::CalendarWeek;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

/// A table rendered to strings, shared by the console view and the exporters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Vec<String>,
}

impl TextTable {
    /// Header, rows, then footer.
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.header).chain(self.rows.iter()).chain(std::iter::once(&self.footer))
    }

    /// The week table: one row per day with its comments.
    pub fn week(table: &WeekTable) -> Self {
        let mut header = vec!["DAY".to_string(), "COMMENTS".to_string(), "TOTAL".to_string()];
        header.extend(table.projects.iter().map(|p| p.name.clone()));

        let rows = table
            .rows
            .iter()
            .map(|day| {
                let mut cells = vec![day.date.format("%a %Y-%m-%d").to_string(), day.comments.join(" ")];
                cells.extend(duration_cells(day));
                cells
            })
            .collect();

        let mut footer = vec!["TOTAL".to_string(), String::new(), table.total.to_string()];
        footer.extend(table.totals.iter().map(|d| d.to_string()));

        Self { header, rows, footer }
    }

    /// The month table: one row per week, followed by its days when `with_days` is set.
    pub fn month(table: &MonthTable, with_days: bool) -> Self {
        let mut header = vec!["WEEK/DAY".to_string(), "TOTAL".to_string()];
        header.extend(table.projects.iter().map(|p| p.name.clone()));

        let mut rows = Vec::new();
        for week in &table.weeks {
            let mut cells = vec![week.week.to_label(), week.total.to_string()];
            cells.extend(week.per_project.iter().map(|d| d.to_string()));
            rows.push(cells);
            if with_days {
                for day in &week.days {
                    let mut cells = vec![format!("  {}", day.date.format("%Y-%m-%d"))];
                    cells.extend(duration_cells(day));
                    rows.push(cells);
                }
            }
        }

        let mut footer = vec!["TOTAL".to_string(), table.total.to_string()];
        footer.extend(table.totals.iter().map(|d| d.to_string()));

        Self { header, rows, footer }
    }
}

fn duration_cells(day: &DayRow) -> Vec<String> {
    std::iter::once(day.total.to_string())
        .chain(day.per_project.iter().map(|d| d.to_string()))
        .collect()
}

fn to_prettytable(text: &TextTable) -> Table {
    let mut table = Table::new();
    let cells = |values: &Vec<String>| Row::new(values.iter().map(|v| Cell::new(v)).collect());
    table.set_titles(cells(&text.header));
    for row in &text.rows {
        table.add_row(cells(row));
    }
    table.add_row(cells(&text.footer));
    table
}

pub struct View {}

impl View {
    pub fn week_table(table: &WeekTable) -> Result<()> {
        to_prettytable(&TextTable::week(table)).printstd();
        Ok(())
    }

    pub fn week_summary(summary: &WeekSummary) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Chargeable", summary.chargeable]);
        table.add_row(row!["Non-chargeable", summary.non_chargeable]);
        table.add_row(row!["Total", summary.total]);
        table.add_row(row!["Days worked", summary.days_worked]);
        table.add_row(row!["Target", summary.target]);
        table.printstd();
        Ok(())
    }

    pub fn month_table(table: &MonthTable, with_days: bool) -> Result<()> {
        to_prettytable(&TextTable::month(table, with_days)).printstd();
        Ok(())
    }

    pub fn weeks(weeks: &[CalendarWeek]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["WEEK", "MONDAY", "FRIDAY", "SUNDAY"]);
        for week in weeks {
            table.add_row(row![week.to_label(), week.monday(), week.friday(), week.sunday()]);
        }
        table.printstd();
        Ok(())
    }
}
