//! Ordering policy for the sorted view.
//!
//! Two deliberately separate contracts live here: [`compare`] decides the
//! sort order of the flat view and [`dedup_key`] decides which nodes count
//! as duplicates. They happen to agree today (both look only at the label)
//! but they are distinct on purpose, so a future change to one cannot
//! silently change the other.

use std::cmp::Ordering;

use deplens_core::node::DependencyNode;

/// Total order for the sorted view: case-sensitive lexicographic
/// comparison of labels.
///
/// No tiebreak is needed — nodes with equal labels never both survive
/// deduplication, so the comparator never has to separate them.
pub fn compare(a: &DependencyNode, b: &DependencyNode) -> Ordering {
    a.label.cmp(&b.label)
}

/// Deduplication key: the label alone.
///
/// The omitted flag is NOT part of the key. When an omitted and a retained
/// occurrence share a label, only one survives deduplication — whichever
/// the traversal encounters first. That survivorship is an artifact of
/// traversal order, not a guarantee, and is intentionally left as is
/// rather than fixed to always prefer the retained occurrence.
pub fn dedup_key(node: &DependencyNode) -> &str {
    &node.label
}
