// src/dag/stats.rs

//! Dashboard counts over a working set of tasks.

use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::dag::readiness::dependencies_met_in;
use crate::task::Task;

/// Readiness summary for a set of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DepsStats {
    pub total: usize,
    /// Tasks naming at least one prerequisite, resolvable or not.
    pub with_dependencies: usize,
    /// Tasks whose prerequisites are not all met (dangling ids included).
    pub blocked: usize,
    /// `total - blocked`; tasks without prerequisites are always ready.
    pub ready: usize,
}

/// The working set for the dependency views: incomplete tasks, narrowed to
/// `project_id` when one is given.
pub fn dependencies_tasks<'a, T: AsRef<Task>>(
    tasks: &'a [T],
    project_id: Option<&str>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .map(|task| task.as_ref())
        .filter(|task| !task.completed)
        .filter(|task| match project_id {
            Some(project) => task.project_id.as_deref() == Some(project),
            None => true,
        })
        .collect()
}

/// Counts over `tasks`, with readiness evaluated against `tasks` itself.
///
/// A prerequisite that lies outside `tasks` (for example one filtered out by
/// project) cannot be found and therefore counts as unmet. Callers wanting
/// those resolved should use [`update_deps_stats_against`].
pub fn update_deps_stats<T: AsRef<Task>>(tasks: &[T]) -> DepsStats {
    update_deps_stats_against(tasks, tasks)
}

/// Counts over `subset`, with readiness evaluated against `universe`.
pub fn update_deps_stats_against<T, U>(subset: &[T], universe: &[U]) -> DepsStats
where
    T: AsRef<Task>,
    U: AsRef<Task>,
{
    let graph = TaskGraph::new(universe);
    let mut stats = DepsStats {
        total: subset.len(),
        ..DepsStats::default()
    };

    for task in subset.iter().map(|task| task.as_ref()) {
        if task.has_dependencies() {
            stats.with_dependencies += 1;
        }
        if !dependencies_met_in(&graph, task) {
            stats.blocked += 1;
        }
    }
    stats.ready = stats.total - stats.blocked;

    debug!(
        total = stats.total,
        with_dependencies = stats.with_dependencies,
        blocked = stats.blocked,
        ready = stats.ready,
        "computed dependency stats"
    );
    stats
}
