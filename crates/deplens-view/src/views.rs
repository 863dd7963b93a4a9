//! Presentation-facing output types.

use std::collections::HashSet;

use serde::Serialize;

use deplens_core::node::{DependencyNode, NodeKind};

use crate::hierarchy::hierarchical_view;
use crate::ordering;
use crate::sorted::generate_sorted_view;

/// A node of a derived view, ready for presentation.
///
/// Both derivations produce this type. The hierarchical copy mirrors the
/// resolved graph 1:1 and keeps the omitted flags so a renderer can
/// annotate conflict losers; the sorted view nests exactly three levels —
/// root, configurations, flat sorted artifacts — and never contains an
/// omitted node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    pub label: String,
    pub kind: NodeKind,
    pub omitted: bool,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    /// Copy a graph node's identity without its children.
    pub fn mirror(node: &DependencyNode) -> Self {
        Self {
            label: node.label.clone(),
            kind: node.kind,
            omitted: node.omitted,
            children: Vec::new(),
        }
    }
}

/// The immutable, completed output of one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedViews {
    pub hierarchical: ViewNode,
    pub sorted: ViewNode,
    pub stats: ViewStats,
}

impl ResolvedViews {
    /// Derive both views and their stats from a built graph.
    pub fn derive(root: &DependencyNode) -> Self {
        Self {
            hierarchical: hierarchical_view(root),
            sorted: generate_sorted_view(root),
            stats: gather_stats(root),
        }
    }
}

/// Totals gathered per configuration while walking the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewStats {
    pub configurations: Vec<ConfigurationStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationStats {
    pub name: String,
    /// Artifact occurrences in the configuration's subtree, duplicates and
    /// conflict losers included.
    pub occurrences: usize,
    /// Entries surviving deduplication and the omission filter — the size
    /// of this configuration in the sorted view.
    pub unique: usize,
    /// Occurrences flagged as conflict losers.
    pub omitted: usize,
}

/// Count occurrences, sorted-view survivors, and conflict losers for every
/// configuration, using the same traversal order and deduplication key as
/// the sorted view so the numbers always agree with it.
pub fn gather_stats(root: &DependencyNode) -> ViewStats {
    let mut stats = ViewStats::default();
    for configuration in &root.children {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut occurrences = 0usize;
        let mut unique = 0usize;
        let mut omitted = 0usize;

        for child in &configuration.children {
            for node in child.descendants() {
                occurrences += 1;
                if node.omitted {
                    omitted += 1;
                }
                if seen.insert(ordering::dedup_key(node)) && !node.omitted {
                    unique += 1;
                }
            }
        }

        stats.configurations.push(ConfigurationStats {
            name: configuration.label.clone(),
            occurrences,
            unique,
            omitted,
        });
    }
    stats
}
