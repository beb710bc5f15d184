// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::{RawTaskFile, TaskFile};
use crate::errors::{Result, TaskDepsError};

impl TryFrom<RawTaskFile> for TaskFile {
    type Error = crate::errors::TaskDepsError;

    fn try_from(raw: RawTaskFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_task_file(&raw)?;
        Ok(TaskFile::new_unchecked(raw.config, raw.task))
    }
}

/// Check the invariants the engine relies on but cannot enforce itself.
///
/// This checks:
/// - every task has a non-blank id
/// - no two tasks share an id
///
/// It does **not** reject dangling references, self references or cycles.
fn validate_raw_task_file(raw: &RawTaskFile) -> Result<()> {
    ensure_ids_present(raw)?;
    ensure_ids_unique(raw)?;
    Ok(())
}

fn ensure_ids_present(raw: &RawTaskFile) -> Result<()> {
    for (i, task) in raw.task.iter().enumerate() {
        if task.id.trim().is_empty() {
            warn!(index = i, "rejecting task with blank id");
            return Err(TaskDepsError::ConfigError(format!(
                "task #{} has an empty `id`",
                i + 1
            )));
        }
    }
    Ok(())
}

fn ensure_ids_unique(raw: &RawTaskFile) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(raw.task.len());
    for task in raw.task.iter() {
        if !seen.insert(task.id.as_str()) {
            warn!(task = %task.id, "rejecting duplicate task id");
            return Err(TaskDepsError::ConfigError(format!(
                "duplicate task id '{}'",
                task.id
            )));
        }
    }
    Ok(())
}
