//! End-to-end view derivation over raw JSON reports.

use deplens_core::node::DependencyNode;
use deplens_core::report::DependencyReport;
use deplens_view::builder::build_graph;
use deplens_view::views::{ResolvedViews, ViewNode};

fn build(json: &str) -> DependencyNode {
    let report: DependencyReport = serde_json::from_str(json).unwrap();
    build_graph(&report).unwrap()
}

const DIAMOND_REPORT: &str = r#"{
    "root": {"label": "root", "children": [
        {"label": "compile", "children": [
            {"label": "org.slf4j:slf4j-api:1.7.5", "children": []},
            {"label": "com.google.guava:guava:14.0.1", "children": [
                {"label": "org.slf4j:slf4j-api:1.7.5"},
                {"label": "com.google.code.findbugs:jsr305:1.3.9", "omitted": true}
            ]}
        ]},
        {"label": "runtime", "children": [
            {"label": "com.google.code.findbugs:jsr305:2.0.1"}
        ]},
        {"label": "testCompile", "children": []}
    ]}
}"#;

fn level_counts(view: &ViewNode) -> Vec<usize> {
    let mut levels = Vec::new();
    let mut layer = vec![view];
    while !layer.is_empty() {
        levels.push(layer.len());
        layer = layer.iter().flat_map(|n| n.children.iter()).collect();
    }
    levels
}

#[test]
fn hierarchical_view_matches_input_node_counts_per_level() {
    let root = build(DIAMOND_REPORT);
    let views = ResolvedViews::derive(&root);
    // root / 3 configurations / 3 top-level artifacts / 2 nested artifacts
    assert_eq!(level_counts(&views.hierarchical), vec![1, 3, 3, 2]);
    assert_eq!(root.node_count(), 1 + 3 + 3 + 2);
}

#[test]
fn sorted_view_is_ascending_deduplicated_and_omission_free() {
    let root = build(DIAMOND_REPORT);
    let views = ResolvedViews::derive(&root);

    for configuration in &views.sorted.children {
        let labels: Vec<&str> = configuration
            .children
            .iter()
            .map(|n| n.label.as_str())
            .collect();
        for pair in labels.windows(2) {
            assert!(pair[0] < pair[1], "not strictly ascending: {labels:?}");
        }
        assert!(configuration.children.iter().all(|n| !n.omitted));
    }

    let compile: Vec<&str> = views.sorted.children[0]
        .children
        .iter()
        .map(|n| n.label.as_str())
        .collect();
    // slf4j-api occurs twice in the input, once here; the omitted jsr305 is
    // gone entirely.
    assert_eq!(
        compile,
        ["com.google.guava:guava:14.0.1", "org.slf4j:slf4j-api:1.7.5"]
    );
}

#[test]
fn closure_reaches_every_retained_label_exactly_once() {
    let root = build(DIAMOND_REPORT);
    let views = ResolvedViews::derive(&root);

    let runtime: Vec<&str> = views.sorted.children[1]
        .children
        .iter()
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(runtime, ["com.google.code.findbugs:jsr305:2.0.1"]);

    // Empty configuration still shows up, with nothing under it.
    let test_compile = &views.sorted.children[2];
    assert_eq!(test_compile.label, "testCompile");
    assert!(test_compile.children.is_empty());
}

#[test]
fn deriving_twice_from_the_same_report_is_identical() {
    let root = build(DIAMOND_REPORT);
    let first = ResolvedViews::derive(&root);
    let second = ResolvedViews::derive(&root);
    assert_eq!(first.hierarchical, second.hierarchical);
    assert_eq!(first.sorted, second.sorted);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn stats_count_occurrences_unique_and_omitted() {
    let root = build(DIAMOND_REPORT);
    let views = ResolvedViews::derive(&root);

    let compile = &views.stats.configurations[0];
    assert_eq!(compile.name, "compile");
    assert_eq!(compile.occurrences, 4);
    assert_eq!(compile.unique, 2);
    assert_eq!(compile.omitted, 1);

    let test_compile = &views.stats.configurations[2];
    assert_eq!(test_compile.occurrences, 0);
}
