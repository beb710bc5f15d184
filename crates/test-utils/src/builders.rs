#![allow(dead_code)]

use taskdeps::config::{ConfigSection, RawTaskFile, TaskFile};
use taskdeps::types::BlockingScope;
use taskdeps::Task;

/// Builder for `TaskFile` to simplify test setup.
pub struct TaskFileBuilder {
    raw: RawTaskFile,
}

impl TaskFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawTaskFile {
                config: ConfigSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.raw.task.push(task);
        self
    }

    pub fn with_blocking_scope(mut self, scope: BlockingScope) -> Self {
        self.raw.config.blocking_scope = scope;
        self
    }

    pub fn build(self) -> TaskFile {
        TaskFile::try_from(self.raw).expect("Failed to build valid task file from builder")
    }
}

impl Default for TaskFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: Task::new(id),
        }
    }

    pub fn waits_for(mut self, dep: &str) -> Self {
        self.task.waiting_for_task_ids.push(dep.to_string());
        self
    }

    pub fn completed(mut self) -> Self {
        self.task.completed = true;
        self
    }

    pub fn project(mut self, project_id: &str) -> Self {
        self.task.project_id = Some(project_id.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = Some(title.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Shorthand for a task waiting on `deps`.
pub fn task(id: &str, deps: &[&str]) -> Task {
    deps.iter()
        .fold(TaskBuilder::new(id), |b, dep| b.waits_for(dep))
        .build()
}

/// Shorthand for a completed task waiting on `deps`.
pub fn done(id: &str, deps: &[&str]) -> Task {
    let mut t = task(id, deps);
    t.completed = true;
    t
}

/// Ids of a task list, for compact assertions.
pub fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}
