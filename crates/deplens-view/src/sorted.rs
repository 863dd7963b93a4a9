//! The sorted view: per-configuration flat projection of the graph.

use std::collections::HashSet;

use deplens_core::node::DependencyNode;

use crate::ordering;
use crate::views::ViewNode;

/// Derive the deduplicated, alphabetically sorted, omission-filtered view.
///
/// For each configuration under the root, the closure of descendants of
/// every direct child is collected (the child itself plus everything
/// transitively below it), the closures are unioned in child order,
/// duplicates collapse to the first-encountered occurrence, the survivors
/// are sorted by [`ordering::compare`], and conflict losers are dropped.
/// The result nests exactly three levels: root, configurations (kept in
/// resolution order), and a strictly ascending, duplicate-free,
/// omission-free list of artifacts under each.
///
/// Total over any well-formed tree; a configuration with no children simply
/// comes out empty but still present.
pub fn generate_sorted_view(root: &DependencyNode) -> ViewNode {
    let mut out_root = ViewNode::mirror(root);

    for configuration in &root.children {
        let mut out_config = ViewNode::mirror(configuration);

        // Union of per-child closures, deduplicated as it is collected:
        // `descendants` walks each closure in pre-order, so the survivor of
        // a label collision is whichever occurrence the walk meets first.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut survivors: Vec<&DependencyNode> = Vec::new();
        for child in &configuration.children {
            for node in child.descendants() {
                if seen.insert(ordering::dedup_key(node)) {
                    survivors.push(node);
                }
            }
        }

        survivors.sort_by(|a, b| ordering::compare(a, b));

        for node in survivors {
            if node.omitted {
                continue;
            }
            out_config.children.push(ViewNode::mirror(node));
        }

        tracing::trace!(
            configuration = %configuration.label,
            survivors = out_config.children.len(),
            "derived sorted view"
        );
        out_root.children.push(out_config);
    }

    out_root
}
