// tests/diagnostics.rs
mod common;
use crate::common::builders::task;
use crate::common::init_tracing;

use taskdeps::dag::{find_graph_issues, GraphIssue};
use taskdeps::Task;

#[test]
fn clean_graph_has_no_issues() {
    init_tracing();

    let all = vec![task("A", &[]), task("B", &["A"]), task("C", &["A", "B"])];
    assert!(find_graph_issues(&all).is_empty());

    let empty: Vec<Task> = Vec::new();
    assert!(find_graph_issues(&empty).is_empty());
}

#[test]
fn reports_dangling_self_and_cyclic_references() {
    init_tracing();

    let all = vec![
        task("A", &["ghost"]),
        task("B", &["B"]),
        task("C", &["D"]),
        task("D", &["C"]),
        task("E", &["A"]),
    ];

    let issues = find_graph_issues(&all);
    assert_eq!(
        issues,
        vec![
            GraphIssue::DanglingReference {
                task: "A".to_string(),
                missing: "ghost".to_string(),
            },
            GraphIssue::SelfReference {
                task: "B".to_string(),
            },
            GraphIssue::Cycle {
                tasks: vec!["C".to_string(), "D".to_string()],
            },
        ]
    );
}

#[test]
fn longer_cycles_are_reported_once_with_members_in_collection_order() {
    init_tracing();

    let all = vec![
        task("X", &[]),
        task("C", &["B"]),
        task("A", &["C", "X"]),
        task("B", &["A"]),
        task("P", &["Q"]),
        task("Q", &["P"]),
    ];

    let cycles: Vec<GraphIssue> = find_graph_issues(&all);
    assert_eq!(
        cycles,
        vec![
            GraphIssue::Cycle {
                tasks: vec!["C".to_string(), "A".to_string(), "B".to_string()],
            },
            GraphIssue::Cycle {
                tasks: vec!["P".to_string(), "Q".to_string()],
            },
        ]
    );
}

#[test]
fn issues_render_as_readable_messages() {
    init_tracing();

    let dangling = GraphIssue::DanglingReference {
        task: "A".to_string(),
        missing: "ghost".to_string(),
    };
    assert_eq!(dangling.to_string(), "task 'A' waits for unknown task 'ghost'");

    let cycle = GraphIssue::Cycle {
        tasks: vec!["C".to_string(), "D".to_string()],
    };
    assert_eq!(cycle.to_string(), "cycle between tasks: C -> D");
}
