// tests/stats.rs
mod common;
use crate::common::builders::{done, ids, task, TaskBuilder};
use crate::common::init_tracing;

use taskdeps::dag::{dependencies_tasks, update_deps_stats, update_deps_stats_against, DepsStats};
use taskdeps::Task;

#[test]
fn stats_over_fan_out_from_one_open_task() {
    init_tracing();

    let all = vec![task("T1", &[]), task("T2", &["T1"]), task("T3", &["T1"])];

    assert_eq!(
        update_deps_stats(&all),
        DepsStats {
            total: 3,
            with_dependencies: 2,
            blocked: 2,
            ready: 1,
        }
    );
}

#[test]
fn stats_of_nothing_are_zero() {
    init_tracing();

    let empty: Vec<Task> = Vec::new();
    assert_eq!(update_deps_stats(&empty), DepsStats::default());
}

#[test]
fn dangling_and_cyclic_tasks_count_as_blocked() {
    init_tracing();

    let all = vec![
        task("A", &["ghost"]),
        task("B", &["C"]),
        task("C", &["B"]),
        task("D", &[]),
    ];

    let stats = update_deps_stats(&all);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.with_dependencies, 3);
    assert_eq!(stats.blocked, 3);
    assert_eq!(stats.ready, 1);
}

#[test]
fn working_set_drops_completed_tasks() {
    init_tracing();

    let all = vec![done("A", &[]), task("B", &["A"]), task("C", &[])];

    assert_eq!(ids(&dependencies_tasks(&all, None)), vec!["B", "C"]);
}

#[test]
fn working_set_narrows_to_project() {
    init_tracing();

    let all = vec![
        TaskBuilder::new("A").project("home").build(),
        TaskBuilder::new("B").project("work").build(),
        TaskBuilder::new("C").project("home").completed().build(),
        TaskBuilder::new("D").build(),
    ];

    assert_eq!(ids(&dependencies_tasks(&all, Some("home"))), vec!["A"]);
    assert_eq!(ids(&dependencies_tasks(&all, Some("none"))), Vec::<String>::new());
    assert_eq!(ids(&dependencies_tasks(&all, None)), vec!["A", "B", "D"]);
}

#[test]
fn prerequisite_outside_the_subset_counts_as_blocked() {
    init_tracing();

    let all = vec![
        TaskBuilder::new("A").project("home").completed().build(),
        TaskBuilder::new("B").project("work").waits_for("A").build(),
    ];
    let work = dependencies_tasks(&all, Some("work"));

    let stats = update_deps_stats(&work);
    assert_eq!(stats.blocked, 1);
    assert_eq!(stats.ready, 0);
}

#[test]
fn stats_against_the_full_collection_resolve_outside_prerequisites() {
    init_tracing();

    let all = vec![
        TaskBuilder::new("A").project("home").completed().build(),
        TaskBuilder::new("B").project("work").waits_for("A").build(),
        TaskBuilder::new("C").project("work").waits_for("B").build(),
    ];
    let work = dependencies_tasks(&all, Some("work"));

    let stats = update_deps_stats_against(&work, &all);
    assert_eq!(
        stats,
        DepsStats {
            total: 2,
            with_dependencies: 2,
            blocked: 1,
            ready: 1,
        }
    );
}
