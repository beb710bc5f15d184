// src/dag/mod.rs

//! Task dependency graph analysis.
//!
//! - [`graph`] indexes a task snapshot once per call and resolves ids.
//! - [`readiness`] decides whether a task's prerequisites are done.
//! - [`level`] computes how deep a task sits in its dependency chain.
//! - [`chains`] enumerates maximal prerequisite -> dependent paths.
//! - [`critical_path`] picks the longest of those chains.
//! - [`stats`] summarizes readiness over a working set.
//! - [`diagnostics`] reports dangling ids, self references and cycles.
//!
//! None of these return errors: malformed graphs degrade to level 0, empty
//! lists and zero counts.

pub mod chains;
pub mod critical_path;
pub mod diagnostics;
pub mod graph;
pub mod level;
pub mod readiness;
pub mod stats;

pub use chains::build_dependency_chains;
pub use critical_path::calculate_critical_path;
pub use diagnostics::{find_graph_issues, GraphIssue};
pub use graph::{Resolution, TaskGraph};
pub use level::{calculate_task_level, group_by_level, task_levels};
pub use readiness::{are_dependencies_met, pending_dependencies};
pub use stats::{dependencies_tasks, update_deps_stats, update_deps_stats_against, DepsStats};
