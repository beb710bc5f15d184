// src/config/model.rs

use serde::Deserialize;

use crate::task::Task;
use crate::types::BlockingScope;

/// A task snapshot exactly as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// blocking_scope = "subset"
///
/// [[task]]
/// id = "T1"
/// completed = true
///
/// [[task]]
/// id = "T2"
/// waiting_for_task_ids = ["T1"]
/// ```
///
/// All sections are optional; an empty file is an empty snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTaskFile {
    /// Analysis behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[[task]]`, in file order.
    #[serde(default)]
    pub task: Vec<Task>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"subset"` (default) or `"all"`; see [`BlockingScope`].
    #[serde(default)]
    pub blocking_scope: BlockingScope,
}

/// A validated snapshot: ids are non-empty and unique.
///
/// Dangling references, self references and cycles are *not* rejected; the
/// engine handles them and `taskdeps check` reports them.
#[derive(Debug, Clone)]
pub struct TaskFile {
    config: ConfigSection,
    tasks: Vec<Task>,
}

impl TaskFile {
    /// Build without validation. Use `TaskFile::try_from(raw)` instead unless
    /// the tasks are already known to be well formed.
    pub fn new_unchecked(config: ConfigSection, tasks: Vec<Task>) -> Self {
        Self { config, tasks }
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    /// Every task in the snapshot, completed ones included.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}
