// src/task.rs

//! The minimal task shape the dependency engine works on.

use serde::Deserialize;

/// Canonical task identifier type.
pub type TaskId = String;

/// A task as seen by the dependency engine.
///
/// Only the fields needed for graph analysis and readiness are modelled;
/// anything else present in a snapshot (energy, estimates, recurrence, ...)
/// is ignored on deserialization.
///
/// ```toml
/// [[task]]
/// id = "T2"
/// title = "Paint the fence"
/// waiting_for_task_ids = ["T1"]
/// project_id = "house"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Unique within a collection, immutable after creation.
    pub id: TaskId,

    /// Display-only label.
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub completed: bool,

    /// Ids of the tasks this one waits for, in the order the user added them.
    ///
    /// May name tasks that are not in the collection, the task itself, or
    /// tasks that wait back on this one.
    #[serde(default)]
    pub waiting_for_task_ids: Vec<TaskId>,

    /// Only used to narrow the working set before analysis.
    #[serde(default)]
    pub project_id: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            completed: false,
            waiting_for_task_ids: Vec::new(),
            project_id: None,
        }
    }

    /// Whether this task names any prerequisite at all, resolvable or not.
    pub fn has_dependencies(&self) -> bool {
        !self.waiting_for_task_ids.is_empty()
    }

    /// Human-readable label: the id, followed by the title when there is one.
    pub fn label(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => format!("{} ({})", self.id, title),
            _ => self.id.clone(),
        }
    }
}

impl AsRef<Task> for Task {
    fn as_ref(&self) -> &Task {
        self
    }
}
