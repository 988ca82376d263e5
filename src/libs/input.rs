//! Reading work weeks and projects from JSON files.
//!
//! A work file holds either a single work week object or an array of them.
//! A projects file holds an array of projects.

use super::messages::Message;
use super::work::{sort_work_weeks, Project, WorkWeek};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(untagged)]
enum WorkFile {
    Many(Vec<WorkWeek>),
    One(WorkWeek),
}

pub fn parse_work_weeks(json: &str) -> serde_json::Result<Vec<WorkWeek>> {
    Ok(match serde_json::from_str(json)? {
        WorkFile::Many(weeks) => weeks,
        WorkFile::One(week) => vec![week],
    })
}

pub fn read_work_weeks(path: &Path) -> Result<Vec<WorkWeek>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let weeks = parse_work_weeks(&json).with_context(|| Message::InputFileInvalid(path.display().to_string()))?;
    tracing::debug!("{}", Message::InputFileRead(path.display().to_string(), weeks.len()));
    Ok(weeks)
}

/// Reads every file, then sorts the weeks by label and drops duplicates.
pub fn read_all_work_weeks(paths: &[PathBuf]) -> Result<Vec<WorkWeek>> {
    let mut weeks = Vec::new();
    for path in paths {
        weeks.extend(read_work_weeks(path)?);
    }
    sort_work_weeks(&mut weeks);
    Ok(weeks)
}

pub fn read_projects(path: &Path) -> Result<Vec<Project>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing projects from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_many_weeks() {
        let one = r#"{"week": "2024-W09", "work": []}"#;
        assert_eq!(parse_work_weeks(one).unwrap().len(), 1);

        let many = r#"[{"week": "2024-W09", "work": []}, {"week": {"year": 2024, "week": 10}, "work": []}]"#;
        let weeks = parse_work_weeks(many).unwrap();
        assert_eq!(weeks[1].week.to_label(), "2024-W10");
    }

    #[test]
    fn test_invalid_work_file() {
        assert!(parse_work_weeks(r#"{"week": "someday", "work": []}"#).is_err());
    }
}
