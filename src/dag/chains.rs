// src/dag/chains.rs

//! Dependency chains: maximal prerequisite -> dependent paths.
//!
//! Every structural root (a task waiting on nothing that resolves) that has
//! at least one dependent yields one chain: the longest simple forward path
//! starting at it. Among equally long continuations the first dependent in
//! collection order wins.
//!
//! The forward walk keeps an on-path set; a dependent already on the path is
//! not stepped into, so cycles terminate. Suffixes are memoised per task, but
//! only when their walk never hit the on-path guard, which keeps the cost
//! polynomial on acyclic graphs no matter how many paths they contain.

use tracing::{debug, trace};

use crate::dag::graph::TaskGraph;
use crate::task::Task;

/// One chain per structural root, longest first.
///
/// Chains of equal length keep root order (collection order).
pub fn build_dependency_chains<'a, T: AsRef<Task>>(tasks: &'a [T]) -> Vec<Vec<&'a Task>> {
    let graph = TaskGraph::new(tasks);
    let mut chains: Vec<Vec<&'a Task>> = root_chains(&graph)
        .into_iter()
        .map(|path| path.into_iter().map(|pos| graph.task(pos)).collect())
        .collect();

    // Stable: equal lengths stay in root order.
    chains.sort_by(|a, b| b.len().cmp(&a.len()));

    debug!(
        chains = chains.len(),
        longest = chains.first().map_or(0, Vec::len),
        "built dependency chains"
    );
    chains
}

/// Longest forward path from every structural root with a dependent, in root
/// order. Each path holds at least two positions.
pub(crate) fn root_chains(graph: &TaskGraph<'_>) -> Vec<Vec<usize>> {
    let mut walker = ForwardWalker::new(graph);
    let mut chains = Vec::new();

    for root in 0..graph.len() {
        if !graph.is_structural_root(root) || graph.dependents_of(root).is_empty() {
            continue;
        }

        trace!(root = %graph.task(root).id, "walking longest chain from root");
        let walk = walker.walk(root);
        if walk.path.len() >= 2 {
            chains.push(walk.path);
        }
    }

    chains
}

/// Result of walking forward from one task.
#[derive(Debug)]
struct Walk {
    /// Longest simple path starting at the walked task.
    path: Vec<usize>,
    /// The walk skipped a dependent because it was on the path. Such a
    /// suffix depends on what was on the stack and must not be memoised.
    guarded: bool,
}

/// Per-call state: memoised suffixes plus the on-path set.
struct ForwardWalker<'g, 'a> {
    graph: &'g TaskGraph<'a>,
    memo: Vec<Option<Vec<usize>>>,
    on_path: Vec<bool>,
}

impl<'g, 'a> ForwardWalker<'g, 'a> {
    fn new(graph: &'g TaskGraph<'a>) -> Self {
        Self {
            graph,
            memo: vec![None; graph.len()],
            on_path: vec![false; graph.len()],
        }
    }

    fn walk(&mut self, pos: usize) -> Walk {
        if let Some(path) = &self.memo[pos] {
            return Walk {
                path: path.clone(),
                guarded: false,
            };
        }

        self.on_path[pos] = true;
        let mut best: Vec<usize> = Vec::new();
        let mut guarded = false;

        for &dep in self.graph.dependents_of(pos) {
            if self.on_path[dep] {
                trace!(
                    task = %self.graph.task(dep).id,
                    "dependent already on the path; not extending"
                );
                guarded = true;
                continue;
            }
            let walk = self.walk(dep);
            guarded |= walk.guarded;
            // Strictly longer only, so the first dependent survives ties.
            if walk.path.len() > best.len() {
                best = walk.path;
            }
        }
        self.on_path[pos] = false;

        let mut path = Vec::with_capacity(best.len() + 1);
        path.push(pos);
        path.extend(best);

        if !guarded {
            self.memo[pos] = Some(path.clone());
        }
        Walk { path, guarded }
    }
}
