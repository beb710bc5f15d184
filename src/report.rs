// src/report.rs

//! Plain-text rendering of the dependency views for the CLI.
//!
//! Every view works on the *working set*: incomplete tasks of the snapshot,
//! narrowed to one project when asked. Diagnostics are the exception and
//! look at the whole snapshot.

use tracing::debug;

use crate::config::TaskFile;
use crate::dag::graph::{Resolution, TaskGraph};
use crate::dag::readiness::{dependencies_met_in, pending_in};
use crate::dag::{
    build_dependency_chains, calculate_critical_path, calculate_task_level, dependencies_tasks,
    find_graph_issues, group_by_level, update_deps_stats_against, DepsStats,
};
use crate::errors::{Result, TaskDepsError};
use crate::task::Task;
use crate::types::BlockingScope;

/// A snapshot plus the working set derived from it.
#[derive(Debug)]
pub struct Report<'a> {
    file: &'a TaskFile,
    working_set: Vec<&'a Task>,
    blocking_scope: BlockingScope,
}

impl<'a> Report<'a> {
    pub fn new(file: &'a TaskFile, project: Option<&str>) -> Self {
        let working_set = dependencies_tasks(file.tasks(), project);
        debug!(
            project = project.unwrap_or("<all>"),
            working_set = working_set.len(),
            "selected working set"
        );
        Self {
            file,
            working_set,
            blocking_scope: file.config().blocking_scope,
        }
    }

    /// Replace the snapshot's `[config].blocking_scope`.
    pub fn with_blocking_scope(mut self, scope: BlockingScope) -> Self {
        debug!(?scope, "blocking scope overridden");
        self.blocking_scope = scope;
        self
    }

    pub fn blocking_scope(&self) -> BlockingScope {
        self.blocking_scope
    }

    pub fn working_set(&self) -> &[&'a Task] {
        &self.working_set
    }

    /// Tasks prerequisites are resolved against, per the blocking scope.
    fn universe(&self) -> Vec<&'a Task> {
        match self.blocking_scope {
            BlockingScope::Subset => self.working_set.clone(),
            BlockingScope::All => self.file.tasks().iter().collect(),
        }
    }

    pub fn stats(&self) -> DepsStats {
        update_deps_stats_against(&self.working_set, &self.universe())
    }

    pub fn render_stats(&self) -> String {
        let stats = self.stats();
        [
            format!("total:             {}", stats.total),
            format!("with dependencies: {}", stats.with_dependencies),
            format!("blocked:           {}", stats.blocked),
            format!("ready:             {}", stats.ready),
        ]
        .join("\n")
    }

    pub fn render_levels(&self) -> String {
        let columns = group_by_level(&self.working_set);
        if columns.is_empty() {
            return "no tasks".to_string();
        }

        let mut lines = Vec::new();
        for (level, tasks) in columns {
            lines.push(format!("level {level}:"));
            lines.extend(tasks.iter().map(|t| format!("  - {}", t.label())));
        }
        lines.join("\n")
    }

    /// Level of the snapshot task `id`, evaluated against the working set.
    pub fn render_level(&self, id: &str) -> Result<String> {
        let task = self
            .file
            .find(id)
            .ok_or_else(|| TaskDepsError::TaskNotFound(id.to_string()))?;
        let level = calculate_task_level(task, &self.working_set);
        Ok(format!("{}: level {level}", task.label()))
    }

    pub fn render_chains(&self) -> String {
        let chains = build_dependency_chains(&self.working_set);
        if chains.is_empty() {
            return "no dependency chains".to_string();
        }

        chains
            .iter()
            .enumerate()
            .map(|(i, chain)| {
                format!("chain {} ({} tasks): {}", i + 1, chain.len(), join_ids(chain, " -> "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_critical_path(&self) -> String {
        let path = calculate_critical_path(&self.working_set);
        if path.is_empty() {
            return "no dependency chains".to_string();
        }
        format!("critical path ({} tasks): {}", path.len(), join_ids(&path, " -> "))
    }

    pub fn render_blocked(&self) -> String {
        let universe = self.universe();
        let graph = TaskGraph::new(&universe);

        let mut lines = Vec::new();
        for task in &self.working_set {
            if dependencies_met_in(&graph, task) {
                continue;
            }

            let mut line = format!("{}: waiting on", task.label());
            let pending = pending_in(&graph, task);
            if !pending.is_empty() {
                line.push(' ');
                line.push_str(&join_ids(&pending, ", "));
            }

            let missing: Vec<&str> = task
                .waiting_for_task_ids
                .iter()
                .filter(|id| graph.resolve(id) == Resolution::Missing)
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                line.push_str(&format!(" (not found: {})", missing.join(", ")));
            }
            lines.push(line);
        }

        if lines.is_empty() {
            return "no blocked tasks".to_string();
        }
        lines.join("\n")
    }

    pub fn render_check(&self) -> String {
        let issues = find_graph_issues(self.file.tasks());
        if issues.is_empty() {
            return "no issues found".to_string();
        }
        issues
            .iter()
            .map(|issue| format!("- {issue}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join_ids(tasks: &[&Task], sep: &str) -> String {
    tasks
        .iter()
        .map(|t| t.id.as_str())
        .collect::<Vec<_>>()
        .join(sep)
}
