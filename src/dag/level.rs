// src/dag/level.rs

//! Structural depth of tasks in the dependency graph.
//!
//! `level(T) = 0` when T waits on nothing that resolves, otherwise
//! `1 + max(level(P))` over its resolved prerequisites P.
//!
//! The walk keeps a visiting set of the tasks currently on the recursion
//! stack. Reaching one of them again (a self-loop or a cycle) contributes 0
//! for that branch instead of recursing, so every input terminates.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::dag::graph::{Resolution, TaskGraph};
use crate::task::Task;

/// Level of a single task, evaluated against `all_tasks`.
///
/// `task` does not have to be part of `all_tasks`; only its waiting list is
/// read, and lookups go through `all_tasks`.
pub fn calculate_task_level<T: AsRef<Task>>(task: &Task, all_tasks: &[T]) -> usize {
    if !task.has_dependencies() {
        return 0;
    }
    let graph = TaskGraph::new(all_tasks);
    LevelWalker::new(&graph).level_of(task)
}

/// Level of every task in `tasks`, in collection order.
///
/// Shares one memo table across the whole call; entry `i` is always equal to
/// `calculate_task_level(&tasks[i], tasks)`.
pub fn task_levels<T: AsRef<Task>>(tasks: &[T]) -> Vec<usize> {
    let graph = TaskGraph::new(tasks);
    let mut walker = LevelWalker::new(&graph);
    let levels: Vec<usize> = graph.tasks().map(|task| walker.level_of(task)).collect();

    debug!(
        tasks = levels.len(),
        max_level = levels.iter().max().copied().unwrap_or(0),
        "computed task levels"
    );
    levels
}

/// Tasks grouped into level columns for the graph view.
///
/// Within a column tasks keep collection order.
pub fn group_by_level<'a, T: AsRef<Task>>(tasks: &'a [T]) -> BTreeMap<usize, Vec<&'a Task>> {
    let levels = task_levels(tasks);
    let mut columns: BTreeMap<usize, Vec<&'a Task>> = BTreeMap::new();

    for (task, level) in tasks.iter().zip(levels) {
        columns.entry(level).or_default().push(task.as_ref());
    }

    columns
}

/// Result of walking one sub-graph.
#[derive(Debug, Clone, Copy)]
struct Walk {
    level: usize,
    /// The walk hit the visiting-set guard somewhere below. Such a value
    /// depends on what was on the stack and must not be memoised.
    guarded: bool,
}

/// Per-call state: memo plus the visiting set, both indexed by position.
struct LevelWalker<'g, 'a> {
    graph: &'g TaskGraph<'a>,
    memo: Vec<Option<usize>>,
    visiting: Vec<bool>,
}

impl<'g, 'a> LevelWalker<'g, 'a> {
    fn new(graph: &'g TaskGraph<'a>) -> Self {
        Self {
            graph,
            memo: vec![None; graph.len()],
            visiting: vec![false; graph.len()],
        }
    }

    /// Entry point for a top-level query.
    fn level_of(&mut self, task: &Task) -> usize {
        if let Some(pos) = self.graph.position_of(task) {
            return self.walk_node(pos).level;
        }

        // Not indexed (outside the collection, or a shadowed duplicate).
        // Its id still counts as "on the stack" if something resolves to it.
        let guard = match self.graph.resolve(&task.id) {
            Resolution::Found(pos) => Some(pos),
            Resolution::Missing => None,
        };
        if let Some(pos) = guard {
            self.visiting[pos] = true;
        }
        let walk = self.walk_prerequisites(task);
        if let Some(pos) = guard {
            self.visiting[pos] = false;
        }
        walk.level
    }

    fn walk_node(&mut self, pos: usize) -> Walk {
        if self.visiting[pos] {
            trace!(task = %self.graph.task(pos).id, "task already on the stack; cycle contributes 0");
            return Walk {
                level: 0,
                guarded: true,
            };
        }
        if let Some(level) = self.memo[pos] {
            return Walk {
                level,
                guarded: false,
            };
        }

        self.visiting[pos] = true;
        let walk = self.walk_prerequisites(self.graph.task(pos));
        self.visiting[pos] = false;

        if !walk.guarded {
            self.memo[pos] = Some(walk.level);
        }
        walk
    }

    fn walk_prerequisites(&mut self, task: &Task) -> Walk {
        let mut deepest: Option<usize> = None;
        let mut guarded = false;

        for dep_id in &task.waiting_for_task_ids {
            // Dangling ids are skipped: no contribution, no penalty.
            let Resolution::Found(dep_pos) = self.graph.resolve(dep_id) else {
                continue;
            };
            let walk = self.walk_node(dep_pos);
            guarded |= walk.guarded;
            deepest = Some(deepest.map_or(walk.level, |d| d.max(walk.level)));
        }

        Walk {
            level: deepest.map_or(0, |d| d + 1),
            guarded,
        }
    }
}
