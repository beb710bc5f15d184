// tests/chains.rs
mod common;
use crate::common::builders::{done, ids, task};
use crate::common::init_tracing;

use taskdeps::dag::{build_dependency_chains, calculate_critical_path};
use taskdeps::Task;

fn scenario() -> Vec<Task> {
    vec![
        done("T1", &[]),
        task("T2", &["T1"]),
        task("T3", &["T2"]),
        task("T4", &["T1"]),
    ]
}

fn chain_ids(chains: &[Vec<&Task>]) -> Vec<Vec<String>> {
    chains.iter().map(|c| ids(c)).collect()
}

#[test]
fn no_tasks_means_no_chains() {
    init_tracing();

    let empty: Vec<Task> = Vec::new();
    assert!(build_dependency_chains(&empty).is_empty());
    assert!(calculate_critical_path(&empty).is_empty());
}

#[test]
fn tasks_without_edges_produce_no_chains() {
    init_tracing();

    let all = vec![task("A", &[]), task("B", &[]), task("C", &["ghost"])];

    assert!(build_dependency_chains(&all).is_empty());
    assert!(calculate_critical_path(&all).is_empty());
}

#[test]
fn a_root_yields_only_its_longest_branch() {
    init_tracing();

    let all = scenario();
    let chains = build_dependency_chains(&all);

    // T1 -> T4 is shorter than T1 -> T2 -> T3 and shares its root.
    assert_eq!(chain_ids(&chains), vec![vec!["T1", "T2", "T3"]]);
}

#[test]
fn critical_path_prefers_the_longer_branch() {
    init_tracing();

    let all = scenario();
    let path = calculate_critical_path(&all);

    assert_eq!(ids(&path), vec!["T1", "T2", "T3"]);
}

#[test]
fn shorter_chain_discovered_first_is_still_sorted_after() {
    init_tracing();

    let all = vec![
        task("A", &[]),
        task("B", &["A"]),
        task("X", &[]),
        task("Y", &["X"]),
        task("Z", &["Y"]),
    ];

    let chains = build_dependency_chains(&all);
    assert_eq!(chain_ids(&chains), vec![vec!["X", "Y", "Z"], vec!["A", "B"]]);
    assert_eq!(ids(&calculate_critical_path(&all)), vec!["X", "Y", "Z"]);
}

#[test]
fn equal_length_branches_keep_the_first_dependent() {
    init_tracing();

    // Diamond: both A -> B -> D and A -> C -> D have three tasks.
    let all = vec![
        task("A", &[]),
        task("B", &["A"]),
        task("C", &["A"]),
        task("D", &["C", "B"]),
        task("P", &[]),
        task("Q", &["P"]),
    ];

    let chains = build_dependency_chains(&all);
    assert_eq!(
        chain_ids(&chains),
        vec![vec!["A", "B", "D"], vec!["P", "Q"]]
    );
    assert_eq!(ids(&calculate_critical_path(&all)), vec!["A", "B", "D"]);
}

#[test]
fn disconnected_components_are_all_considered() {
    init_tracing();

    let all = vec![
        task("A", &[]),
        task("B", &["A"]),
        task("M", &[]),
        task("N", &["M"]),
        task("O", &["N"]),
        task("P", &["O"]),
    ];

    assert_eq!(
        ids(&calculate_critical_path(&all)),
        vec!["M", "N", "O", "P"]
    );
}

#[test]
fn cycle_below_a_root_closes_the_chain() {
    init_tracing();

    // R -> X -> Y -> X ...
    let all = vec![task("R", &[]), task("X", &["R", "Y"]), task("Y", &["X"])];

    let chains = build_dependency_chains(&all);
    assert_eq!(chain_ids(&chains), vec![vec!["R", "X", "Y"]]);
}

#[test]
fn self_loop_below_a_root_closes_the_chain() {
    init_tracing();

    let all = vec![task("R", &[]), task("S", &["R", "S"])];

    let chains = build_dependency_chains(&all);
    assert_eq!(chain_ids(&chains), vec![vec!["R", "S"]]);
}

#[test]
fn pure_cycle_without_a_root_has_no_chain() {
    init_tracing();

    let all = vec![task("A", &["B"]), task("B", &["A"]), task("C", &["C"])];

    assert!(build_dependency_chains(&all).is_empty());
    assert!(calculate_critical_path(&all).is_empty());
}

#[test]
fn task_with_only_dangling_prerequisites_is_a_root() {
    init_tracing();

    let all = vec![task("A", &["ghost"]), task("B", &["A"])];

    let chains = build_dependency_chains(&all);
    assert_eq!(chain_ids(&chains), vec![vec!["A", "B"]]);
}

#[test]
fn repeated_prerequisite_does_not_duplicate_chains() {
    init_tracing();

    let all = vec![task("A", &[]), task("B", &["A", "A"])];

    let chains = build_dependency_chains(&all);
    assert_eq!(chain_ids(&chains), vec![vec!["A", "B"]]);
}

#[test]
fn chains_work_on_filtered_views() {
    init_tracing();

    let all = scenario();
    let open: Vec<&Task> = all.iter().filter(|t| !t.completed).collect();

    // T1 is gone, so T2 becomes a root and T4 stands alone.
    let chains = build_dependency_chains(&open);
    assert_eq!(chain_ids(&chains), vec![vec!["T2", "T3"]]);
}

#[test]
fn equal_length_roots_keep_collection_order() {
    init_tracing();

    let all = vec![
        task("P", &[]),
        task("Q", &["P"]),
        task("A", &[]),
        task("B", &["A"]),
    ];

    let chains = build_dependency_chains(&all);
    assert_eq!(chain_ids(&chains), vec![vec!["P", "Q"], vec!["A", "B"]]);
    assert_eq!(ids(&calculate_critical_path(&all)), vec!["P", "Q"]);
}

#[test]
fn shared_suffix_is_reused_by_later_roots() {
    init_tracing();

    // Both roots feed into the same tail M -> N -> O.
    let all = vec![
        task("R1", &[]),
        task("R2", &[]),
        task("M", &["R1", "R2"]),
        task("N", &["M"]),
        task("O", &["N"]),
    ];

    let chains = build_dependency_chains(&all);
    assert_eq!(
        chain_ids(&chains),
        vec![vec!["R1", "M", "N", "O"], vec!["R2", "M", "N", "O"]]
    );
}

// j0 -> {a0, b0} -> j1 -> {a1, b1} -> j2 ... has 2^depth distinct root to
// sink paths. Only the longest one per root may come back.
fn stacked_diamonds(depth: usize) -> Vec<Task> {
    let mut all = vec![task("j0", &[])];
    for i in 0..depth {
        let join = format!("j{i}");
        let left = format!("a{i}");
        let right = format!("b{i}");
        all.push(task(&left, &[join.as_str()]));
        all.push(task(&right, &[join.as_str()]));
        all.push(task(&format!("j{}", i + 1), &[left.as_str(), right.as_str()]));
    }
    all
}

#[test]
fn stacked_diamonds_yield_one_chain_per_root() {
    init_tracing();

    let depth = 30;
    let all = stacked_diamonds(depth);
    let roots = all.iter().filter(|t| t.waiting_for_task_ids.is_empty()).count();

    let chains = build_dependency_chains(&all);
    assert!(chains.len() <= roots);
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].len(), 2 * depth + 1);

    let chain = ids(&chains[0]);
    assert_eq!(chain[0], "j0");
    assert_eq!(chain[1], "a0");
    assert_eq!(chain[2 * depth], format!("j{depth}"));

    assert_eq!(calculate_critical_path(&all).len(), 2 * depth + 1);
}
