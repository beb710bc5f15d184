// src/dag/critical_path.rs

//! The critical path: the single longest dependency chain.

use tracing::debug;

use crate::dag::chains::root_chains;
use crate::dag::graph::TaskGraph;
use crate::task::Task;

/// Longest chain in `tasks`, or an empty list when there are no dependency
/// edges.
///
/// Equal to the first element of
/// [`build_dependency_chains`](crate::dag::build_dependency_chains): among
/// chains of the maximum length, the one from the earliest root wins. All
/// structural roots are walked, so disconnected graphs are covered.
pub fn calculate_critical_path<'a, T: AsRef<Task>>(tasks: &'a [T]) -> Vec<&'a Task> {
    let graph = TaskGraph::new(tasks);
    let mut longest: Vec<usize> = Vec::new();

    for chain in root_chains(&graph) {
        // Strictly longer only, so the earliest root survives ties.
        if chain.len() > longest.len() {
            longest = chain;
        }
    }

    debug!(length = longest.len(), "calculated critical path");
    longest.into_iter().map(|pos| graph.task(pos)).collect()
}
