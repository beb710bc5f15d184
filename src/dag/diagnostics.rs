// src/dag/diagnostics.rs

//! Report malformed graph structure without rejecting it.
//!
//! The engine tolerates dangling ids, self references and cycles; this
//! module only makes them visible so a user can clean their data up.

use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::dag::graph::{Resolution, TaskGraph};
use crate::task::{Task, TaskId};

/// One structural problem found in a task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// `task` waits for an id that no task in the collection carries.
    DanglingReference { task: TaskId, missing: TaskId },
    /// `task` lists its own id in `waiting_for_task_ids`.
    SelfReference { task: TaskId },
    /// These tasks wait on each other in a loop (collection order).
    Cycle { tasks: Vec<TaskId> },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphIssue::DanglingReference { task, missing } => {
                write!(f, "task '{task}' waits for unknown task '{missing}'")
            }
            GraphIssue::SelfReference { task } => {
                write!(f, "task '{task}' waits for itself")
            }
            GraphIssue::Cycle { tasks } => {
                write!(f, "cycle between tasks: {}", tasks.join(" -> "))
            }
        }
    }
}

/// Find dangling references, self references and cycles in `tasks`.
///
/// Dangling and self references come first, in collection order; cycles
/// follow, ordered by the position of their first member.
pub fn find_graph_issues<T: AsRef<Task>>(tasks: &[T]) -> Vec<GraphIssue> {
    let graph = TaskGraph::new(tasks);
    let mut issues = Vec::new();

    // Edge direction: prerequisite -> dependent, self loops left out so that
    // they are only reported once, as `SelfReference`.
    let mut edges: DiGraphMap<usize, ()> = DiGraphMap::new();

    for pos in 0..graph.len() {
        edges.add_node(pos);
        let task = graph.task(pos);

        for dep_id in &task.waiting_for_task_ids {
            match graph.resolve(dep_id) {
                Resolution::Missing => issues.push(GraphIssue::DanglingReference {
                    task: task.id.clone(),
                    missing: dep_id.clone(),
                }),
                Resolution::Found(_) if *dep_id == task.id => {
                    issues.push(GraphIssue::SelfReference {
                        task: task.id.clone(),
                    });
                }
                Resolution::Found(dep_pos) => {
                    edges.add_edge(dep_pos, pos, ());
                }
            }
        }
    }

    let mut cycles: Vec<Vec<usize>> = tarjan_scc(&edges)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .collect();
    cycles.sort_by_key(|component| component[0]);

    issues.extend(cycles.into_iter().map(|component| GraphIssue::Cycle {
        tasks: component
            .into_iter()
            .map(|pos| graph.task(pos).id.clone())
            .collect(),
    }));

    debug!(issues = issues.len(), "graph diagnostics complete");
    issues
}
