//! Dependency graph construction from a raw resolver report.

use deplens_core::node::{DependencyNode, NodeKind};
use deplens_core::report::{DependencyReport, RawDependency};
use deplens_util::errors::{DeplensError, DeplensResult};

/// Depth past which a report is rejected as malformed instead of walked
/// further. Real build graphs stay far below this.
pub const MAX_GRAPH_DEPTH: usize = 512;

/// Build the hierarchical dependency tree from a raw resolver report.
///
/// The report must contain a `"root"` entry; a report without one is a
/// caller error and no default root is synthesized. The root's direct
/// children become configuration roots and everything deeper becomes
/// artifact nodes. Resolver-reported child order is preserved at every
/// level — it reflects first-discovered resolution order and the
/// hierarchical view depends on it.
pub fn build_graph(report: &DependencyReport) -> DeplensResult<DependencyNode> {
    let raw_root = report.root().ok_or(DeplensError::MissingRoot)?;
    let mut root = node_at_depth(raw_root, 0)?;

    // Iterative pre-order conversion: each popped entry attaches to the
    // most recently placed node one level up, so no call-stack recursion
    // is needed no matter how deep the report nests.
    let mut work: Vec<(&RawDependency, usize)> = Vec::new();
    for child in raw_root.children.iter().rev() {
        work.push((child, 1));
    }

    while let Some((raw, depth)) = work.pop() {
        if depth > MAX_GRAPH_DEPTH {
            return Err(DeplensError::Structure {
                message: format!(
                    "dependency chain below \"{}\" exceeds the depth limit of {MAX_GRAPH_DEPTH}",
                    raw.label
                ),
            }
            .into());
        }

        let node = node_at_depth(raw, depth)?;
        rightmost_at_depth(&mut root, depth - 1)?.push_child(node);

        for child in raw.children.iter().rev() {
            work.push((child, depth + 1));
        }
    }

    tracing::debug!(
        "built dependency graph: {} nodes, {} configurations",
        root.node_count(),
        root.children.len()
    );
    Ok(root)
}

/// Create a node for a raw entry, classifying it by depth and enforcing
/// that only artifacts can be omitted.
fn node_at_depth(raw: &RawDependency, depth: usize) -> DeplensResult<DependencyNode> {
    let kind = match depth {
        0 => NodeKind::Root,
        1 => NodeKind::Configuration,
        _ => NodeKind::Artifact,
    };

    if raw.omitted && kind != NodeKind::Artifact {
        let role = match kind {
            NodeKind::Root => "the root",
            _ => "a configuration root",
        };
        return Err(DeplensError::Structure {
            message: format!("\"{}\" is {role} and cannot be marked omitted", raw.label),
        }
        .into());
    }

    Ok(DependencyNode {
        label: raw.label.clone(),
        kind,
        omitted: raw.omitted,
        children: Vec::with_capacity(raw.children.len()),
    })
}

/// Walk down the last-child chain to the insertion point at `depth`.
///
/// During a pre-order build the parent of the next node is always the most
/// recently placed node one level above it, which by construction sits on
/// the last-child chain from the root.
fn rightmost_at_depth(
    root: &mut DependencyNode,
    depth: usize,
) -> DeplensResult<&mut DependencyNode> {
    let mut node = root;
    for _ in 0..depth {
        node = node.children.last_mut().ok_or_else(|| DeplensError::Structure {
            message: "report children are not in pre-order".to_string(),
        })?;
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deplens_core::report::ROOT_KEY;

    fn raw(label: &str, omitted: bool, children: Vec<RawDependency>) -> RawDependency {
        RawDependency {
            label: label.to_string(),
            omitted,
            children,
        }
    }

    fn report_with_root(root: RawDependency) -> DependencyReport {
        let mut report = DependencyReport::default();
        report.insert(ROOT_KEY, root);
        report
    }

    #[test]
    fn missing_root_entry_is_an_error() {
        let mut report = DependencyReport::default();
        report.insert("compile", raw("compile", false, vec![]));

        let err = build_graph(&report).unwrap_err();
        assert!(err.to_string().contains("no \"root\" entry"), "got: {err}");
    }

    #[test]
    fn kinds_follow_depth() {
        let report = report_with_root(raw(
            "root",
            false,
            vec![raw(
                "compile",
                false,
                vec![raw(
                    "org.a:a:1.0",
                    false,
                    vec![raw("org.b:b:2.0", false, vec![])],
                )],
            )],
        ));

        let root = build_graph(&report).unwrap();
        assert_eq!(root.kind, NodeKind::Root);
        assert_eq!(root.children[0].kind, NodeKind::Configuration);
        assert_eq!(root.children[0].children[0].kind, NodeKind::Artifact);
        assert_eq!(root.children[0].children[0].children[0].kind, NodeKind::Artifact);
    }

    #[test]
    fn child_order_is_preserved_not_sorted() {
        let report = report_with_root(raw(
            "root",
            false,
            vec![raw(
                "compile",
                false,
                vec![
                    raw("org.z:z:1.0", false, vec![]),
                    raw("org.a:a:1.0", false, vec![]),
                    raw("org.m:m:1.0", false, vec![]),
                ],
            )],
        ));

        let root = build_graph(&report).unwrap();
        let labels: Vec<&str> = root.children[0]
            .children
            .iter()
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(labels, ["org.z:z:1.0", "org.a:a:1.0", "org.m:m:1.0"]);
    }

    #[test]
    fn omitted_configuration_root_is_rejected() {
        let report = report_with_root(raw(
            "root",
            false,
            vec![raw("compile", true, vec![])],
        ));

        let err = build_graph(&report).unwrap_err();
        assert!(err.to_string().contains("configuration root"), "got: {err}");
    }

    #[test]
    fn omitted_root_is_rejected() {
        let report = report_with_root(raw("root", true, vec![]));
        let err = build_graph(&report).unwrap_err();
        assert!(err.to_string().contains("the root"), "got: {err}");
    }

    #[test]
    fn omitted_artifacts_pass_through() {
        let report = report_with_root(raw(
            "root",
            false,
            vec![raw(
                "compile",
                false,
                vec![raw("org.a:a:1.0", true, vec![])],
            )],
        ));

        let root = build_graph(&report).unwrap();
        assert!(root.children[0].children[0].omitted);
    }

    #[test]
    fn depth_limit_rejects_pathological_chains() {
        let mut nested = raw("org.x:leaf:1.0", false, vec![]);
        for i in 0..MAX_GRAPH_DEPTH {
            nested = raw(&format!("org.x:level{i}:1.0"), false, vec![nested]);
        }
        let report = report_with_root(raw("root", false, vec![nested]));

        let err = build_graph(&report).unwrap_err();
        assert!(err.to_string().contains("depth limit"), "got: {err}");
    }

    #[test]
    fn deep_but_legal_chains_build() {
        let mut nested = raw("org.x:leaf:1.0", false, vec![]);
        for i in 0..100 {
            nested = raw(&format!("org.x:level{i}:1.0"), false, vec![nested]);
        }
        let report = report_with_root(raw("root", false, vec![raw("compile", false, vec![nested])]));

        let root = build_graph(&report).unwrap();
        // root + configuration + 100 chain links + leaf
        assert_eq!(root.node_count(), 103);
    }
}
