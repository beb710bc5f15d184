// src/dag/graph.rs

use std::collections::HashMap;

use crate::task::Task;

/// Outcome of looking up a `waiting_for_task_ids` entry in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Position of the task carrying the id.
    Found(usize),
    /// No task in the collection carries the id (dangling reference).
    Missing,
}

/// Internal node structure: the task itself plus its direct dependents.
#[derive(Debug, Clone)]
struct GraphNode<'a> {
    task: &'a Task,
    /// Positions of tasks that wait for this one, in collection order.
    dependents: Vec<usize>,
}

/// Arena view over one task snapshot.
///
/// Built once per engine call so lookups inside traversals are O(1) instead
/// of rescanning the collection. Nodes are addressed by their position in
/// the collection that was indexed.
///
/// Edges are never materialised for dangling ids: an id that does not
/// resolve simply contributes nothing to `dependents`.
#[derive(Debug, Clone)]
pub struct TaskGraph<'a> {
    nodes: Vec<GraphNode<'a>>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> TaskGraph<'a> {
    /// Index a task collection.
    ///
    /// If several tasks share an id, the first one wins; later duplicates
    /// stay addressable by position but are never the target of a lookup.
    pub fn new<T: AsRef<Task>>(tasks: &'a [T]) -> Self {
        let mut nodes: Vec<GraphNode<'a>> = Vec::with_capacity(tasks.len());
        let mut positions: HashMap<&'a str, usize> = HashMap::with_capacity(tasks.len());

        // First pass: create nodes and the id lookup.
        for (pos, task) in tasks.iter().enumerate() {
            let task = task.as_ref();
            positions.entry(task.id.as_str()).or_insert(pos);
            nodes.push(GraphNode {
                task,
                dependents: Vec::new(),
            });
        }

        // Second pass: populate dependents from each task's waiting list.
        for pos in 0..nodes.len() {
            let task = nodes[pos].task;
            for dep_id in &task.waiting_for_task_ids {
                if let Some(&dep_pos) = positions.get(dep_id.as_str()) {
                    let dependents = &mut nodes[dep_pos].dependents;
                    // A task naming the same prerequisite twice is still one dependent.
                    if dependents.last() != Some(&pos) {
                        dependents.push(pos);
                    }
                }
            }
        }

        Self { nodes, positions }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The task stored at `pos`.
    ///
    /// Panics if `pos` is out of range; positions only ever come from this
    /// graph.
    pub fn task(&self, pos: usize) -> &'a Task {
        self.nodes[pos].task
    }

    /// All indexed tasks, in collection order.
    pub fn tasks(&self) -> impl Iterator<Item = &'a Task> + '_ {
        self.nodes.iter().map(|n| n.task)
    }

    /// Look an id up.
    pub fn resolve(&self, id: &str) -> Resolution {
        match self.positions.get(id) {
            Some(&pos) => Resolution::Found(pos),
            None => Resolution::Missing,
        }
    }

    /// Position of `task` if it is the task this graph resolves its id to.
    ///
    /// Returns `None` for tasks outside the collection and for shadowed
    /// duplicates.
    pub fn position_of(&self, task: &Task) -> Option<usize> {
        match self.resolve(&task.id) {
            Resolution::Found(pos) if std::ptr::eq(self.nodes[pos].task, task) => Some(pos),
            _ => None,
        }
    }

    /// Positions of the prerequisites of `task` that resolve, in
    /// `waiting_for_task_ids` order. Repeated ids are yielded repeatedly.
    pub fn resolved_prerequisites<'t>(&'t self, task: &'t Task) -> impl Iterator<Item = usize> + 't {
        task.waiting_for_task_ids
            .iter()
            .filter_map(|id| match self.resolve(id) {
                Resolution::Found(pos) => Some(pos),
                Resolution::Missing => None,
            })
    }

    /// Immediate dependents of the task at `pos` (tasks that wait for it).
    pub fn dependents_of(&self, pos: usize) -> &[usize] {
        self.nodes
            .get(pos)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// A structural root has no prerequisite that resolves: its waiting list
    /// is empty or entirely dangling.
    pub fn is_structural_root(&self, pos: usize) -> bool {
        self.resolved_prerequisites(self.task(pos)).next().is_none()
    }
}
