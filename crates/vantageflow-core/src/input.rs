//! Task-export ingestion.
//!
//! Board exports are JSON files, each holding an array of task records.
//! Files are discovered by walking a data directory and parsed in
//! parallel; unreadable or malformed files are skipped with a warning so
//! one bad export never hides the rest.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::{ActivityStreams, DatedObservation, TaskDetail};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One task as exported by the board. `completed_on` and `due_date` are
/// date-only; the export writes them as `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub project: String,
    #[serde(default)]
    pub section: String,
    pub name: String,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_on: Option<NaiveDate>,
}

impl TaskRecord {
    fn detail(&self) -> TaskDetail {
        TaskDetail {
            project: self.project.clone(),
            section: self.section.clone(),
            task: self.name.clone(),
            assignees: self.assignees.clone(),
        }
    }
}

/// Find export files (`*.json`) under `dir`, sorted for determinism.
pub fn scan_export_dir(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

pub fn parse_export_file(path: &Path) -> Result<Vec<TaskRecord>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse every export file, skipping failures.
pub fn load_tasks(paths: &[PathBuf]) -> Vec<TaskRecord> {
    paths
        .par_iter()
        .filter_map(|path| match parse_export_file(path) {
            Ok(tasks) => Some(tasks),
            Err(err) => {
                tracing::warn!("skipping export file: {err}");
                None
            }
        })
        .flatten()
        .collect()
}

/// Group tasks into the three observation streams relative to `today`.
///
/// Completed tasks land in the activity stream on their completion day.
/// Open tasks with a due date split on orientation: due after today feeds
/// the due stream, due on or before today feeds the overdue stream. Open
/// tasks without a due date contribute nothing.
pub fn split_streams(tasks: &[TaskRecord], today: NaiveDate) -> ActivityStreams {
    let mut streams = ActivityStreams::default();

    for task in tasks {
        if task.completed {
            if let Some(day) = task.completed_on {
                streams
                    .activity
                    .push(DatedObservation::new(day, 1));
            }
            continue;
        }
        if let Some(due) = task.due_date {
            let obs = DatedObservation::with_detail(due, 1, task.detail());
            if due > today {
                streams.due.push(obs);
            } else {
                streams.overdue.push(obs);
            }
        }
    }

    streams
}

/// Convenience: scan, load, and split in one call.
pub fn load_streams(dir: &Path, today: NaiveDate) -> ActivityStreams {
    let files = scan_export_dir(dir);
    let tasks = load_tasks(&files);
    split_streams(&tasks, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(name: &str, due: Option<&str>, completed_on: Option<&str>) -> TaskRecord {
        TaskRecord {
            project: "Apollo".to_string(),
            section: "Sprint 12".to_string(),
            name: name.to_string(),
            assignees: vec!["dana".to_string()],
            due_date: due.map(date),
            completed: completed_on.is_some(),
            completed_on: completed_on.map(date),
        }
    }

    #[test]
    fn test_split_streams_orientation() {
        let today = date("2025-06-10");
        let tasks = vec![
            task("done yesterday", None, Some("2025-06-09")),
            task("done last week", Some("2025-06-03"), Some("2025-06-04")),
            task("due tomorrow", Some("2025-06-11"), None),
            task("due today counts as overdue", Some("2025-06-10"), None),
            task("long overdue", Some("2025-06-01"), None),
            task("no due date", None, None),
        ];

        let streams = split_streams(&tasks, today);
        assert_eq!(streams.activity.len(), 2);
        assert_eq!(streams.due.len(), 1);
        assert_eq!(streams.overdue.len(), 2);
        assert_eq!(streams.due[0].day, date("2025-06-11"));
        assert_eq!(streams.overdue[0].details[0].task, "due today counts as overdue");
    }

    #[test]
    fn test_completed_tasks_never_feed_due_streams() {
        let today = date("2025-06-10");
        // Completed with a future due date: stays out of the due stream.
        let tasks = vec![task("finished early", Some("2025-06-20"), Some("2025-06-08"))];
        let streams = split_streams(&tasks, today);
        assert!(streams.due.is_empty());
        assert!(streams.overdue.is_empty());
        assert_eq!(streams.activity.len(), 1);
    }

    #[test]
    fn test_parse_export_file_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("board.json");
        fs::write(
            &path,
            r#"[
                {
                    "project": "Apollo",
                    "section": "Sprint 12",
                    "name": "Ship login",
                    "assignees": ["dana", "lee"],
                    "dueDate": "2025-06-11",
                    "completed": false
                },
                {
                    "project": "Apollo",
                    "name": "Fix sync",
                    "completed": true,
                    "completedOn": "2025-06-09"
                }
            ]"#,
        )
        .unwrap();

        let tasks = parse_export_file(&path).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].due_date, Some(date("2025-06-11")));
        assert_eq!(tasks[0].assignees, vec!["dana", "lee"]);
        assert_eq!(tasks[1].section, "");
        assert_eq!(tasks[1].completed_on, Some(date("2025-06-09")));
    }

    #[test]
    fn test_load_tasks_skips_malformed_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("good.json"), r#"[{"project":"A","name":"t"}]"#).unwrap();
        fs::write(tmp.path().join("bad.json"), "{ not json").unwrap();
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let files = scan_export_dir(tmp.path());
        assert_eq!(files.len(), 2);

        let tasks = load_tasks(&files);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "t");
    }
}
