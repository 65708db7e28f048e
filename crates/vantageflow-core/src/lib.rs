#![deny(clippy::all)]

mod bucket;
mod grid;
mod input;
mod report;
mod streak;

pub use bucket::*;
pub use grid::*;
pub use input::*;
pub use report::*;
pub use streak::*;

use chrono::NaiveDate;

pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Identifying fields of a task, carried through bucketing so the UI can
/// show what is due or overdue on a given day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TaskDetail {
    pub project: String,
    pub section: String,
    pub task: String,
    pub assignees: Vec<String>,
}

/// One dated data point in an observation stream. Several observations may
/// share a day; bucketing sums them.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DatedObservation {
    pub day: NaiveDate,
    pub value: u32,
    #[serde(default)]
    pub details: Vec<TaskDetail>,
}

impl DatedObservation {
    pub fn new(day: NaiveDate, value: u32) -> Self {
        Self {
            day,
            value,
            details: Vec::new(),
        }
    }

    pub fn with_detail(day: NaiveDate, value: u32, detail: TaskDetail) -> Self {
        Self {
            day,
            value,
            details: vec![detail],
        }
    }
}

/// The three independent observation streams the dashboard renders. A past
/// or current day is described by `activity` and `overdue`; a future day by
/// `due` only.
#[derive(Debug, Clone, Default)]
pub struct ActivityStreams {
    pub activity: Vec<DatedObservation>,
    pub due: Vec<DatedObservation>,
    pub overdue: Vec<DatedObservation>,
}
