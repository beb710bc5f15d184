// src/dag/readiness.rs

//! Task readiness: are a task's prerequisites done?
//!
//! The predicate and the "blocked by" listing treat dangling references
//! differently on purpose:
//! - [`are_dependencies_met`] counts a dangling id as unmet, so a task that
//!   waits on something nobody can inspect is reported as blocked.
//! - [`pending_dependencies`] only lists tasks that exist, so dangling ids
//!   are skipped there.

use tracing::trace;

use crate::dag::graph::{Resolution, TaskGraph};
use crate::task::Task;

/// `true` iff every id `task` waits for resolves to a completed task in
/// `all_tasks`. An empty waiting list is trivially met.
pub fn are_dependencies_met<T: AsRef<Task>>(task: &Task, all_tasks: &[T]) -> bool {
    if !task.has_dependencies() {
        return true;
    }
    let graph = TaskGraph::new(all_tasks);
    dependencies_met_in(&graph, task)
}

/// Resolved prerequisites of `task` that are not completed yet.
///
/// Order follows `waiting_for_task_ids`; a prerequisite named twice is
/// returned once.
pub fn pending_dependencies<'a, T: AsRef<Task>>(task: &Task, all_tasks: &'a [T]) -> Vec<&'a Task> {
    if !task.has_dependencies() {
        return Vec::new();
    }
    let graph = TaskGraph::new(all_tasks);
    pending_in(&graph, task)
}

/// Predicate against an already built graph.
pub(crate) fn dependencies_met_in(graph: &TaskGraph<'_>, task: &Task) -> bool {
    task.waiting_for_task_ids
        .iter()
        .all(|dep_id| match graph.resolve(dep_id) {
            Resolution::Found(pos) => graph.task(pos).completed,
            Resolution::Missing => {
                trace!(task = %task.id, dep = %dep_id, "dangling dependency counts as unmet");
                false
            }
        })
}

/// Pending listing against an already built graph.
pub(crate) fn pending_in<'a>(graph: &TaskGraph<'a>, task: &Task) -> Vec<&'a Task> {
    let mut seen: Vec<usize> = Vec::new();
    let mut pending = Vec::new();

    for pos in graph.resolved_prerequisites(task) {
        if seen.contains(&pos) {
            continue;
        }
        seen.push(pos);

        let dep = graph.task(pos);
        if !dep.completed {
            pending.push(dep);
        }
    }

    pending
}
