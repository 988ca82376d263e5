//! Configuration management for the workweek application.
//!
//! Settings are stored as pretty-printed JSON in the platform data
//! directory. A missing file is not an error: the defaults apply until
//! `workweek init` writes one.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\workweek\config.json`
//! - **macOS**: `~/Library/Application Support/workweek/config.json`
//! - **Linux**: `~/.local/share/workweek/config.json`
//!
//! ```rust,no_run
//! use workweek::libs::config::{Config, SummaryConfig};
//!
//! let mut config = Config::read()?;
//! config.summary = Some(SummaryConfig { daily_target_hours: 7, ..SummaryConfig::default() });
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name in the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings for week and month overviews.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SummaryConfig {
    /// Hours expected per day worked.
    ///
    /// A week summary reports the target as met when its total hours reach
    /// this value times the number of days with recorded work.
    pub daily_target_hours: i64,

    /// Whether the week table shows a column for inactive projects.
    pub include_inactive_projects: bool,
}

impl Default for SummaryConfig {
    /// An eight hour day and active projects only.
    fn default() -> Self {
        SummaryConfig {
            daily_target_hours: 8,
            include_inactive_projects: false,
        }
    }
}

/// Root configuration object.
///
/// Every section is optional and omitted from the file when unset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryConfig>,
}

impl Config {
    /// Reads the configuration file, or returns the defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            tracing::debug!(path = %config_file_path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)
            .with_context(|| format!("reading {}", config_file_path.display()))?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| format!("parsing {}", config_file_path.display()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)
            .with_context(|| format!("creating {}", config_file_path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// The summary section, falling back to its defaults.
    pub fn summary(&self) -> SummaryConfig {
        self.summary.clone().unwrap_or_default()
    }
}
