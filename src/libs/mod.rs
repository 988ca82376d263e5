//! Core library modules for the workweek application.
//!
//! The calendar and duration engine (`duration`, `week`, `month`, `period`,
//! `aggregate`) is pure and clock-injected. `summary` builds the week and
//! month tables on top of it, and `view`/`export` present them.
//!
//! ```rust
//! use workweek::libs::duration::Duration;
//! use workweek::libs::week::CalendarWeek;
//!
//! let week = CalendarWeek::parse("2024-W09")?;
//! assert_eq!(week.monday().to_string(), "2024-02-26");
//! assert_eq!(Duration::make(1, 30) - Duration::make(0, 45), Duration::make(0, 45));
//! # Ok::<(), workweek::libs::error::Error>(())
//! ```

pub mod aggregate;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod export;
pub mod input;
pub mod messages;
pub mod month;
pub mod period;
pub mod summary;
pub mod view;
pub mod week;
pub mod work;
