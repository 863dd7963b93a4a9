//! The resolved dependency tree and its traversal.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a node within the resolved dependency tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The single top of the graph; its direct children are configuration roots.
    Root,
    /// A configuration bucket ("compile", "runtime", ...). A container, not an artifact.
    Configuration,
    /// A resolved artifact, labelled `group:artifact:version`.
    Artifact,
}

/// One node of the resolved dependency graph.
///
/// A tree is built once per resolution and never mutated afterwards; a
/// refresh discards it and builds a new one. The root exclusively owns its
/// whole subtree. When the same artifact occurs at several positions
/// (diamond dependencies), each occurrence is a distinct node instance that
/// happens to share a label — reconciling duplicates is the view layer's
/// job, not the model's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    /// Display identifier: `group:artifact:version` for artifacts, the
    /// configuration name for configuration roots.
    pub label: String,
    pub kind: NodeKind,
    /// True iff this occurrence lost version-conflict resolution. Only ever
    /// set on artifact nodes.
    pub omitted: bool,
    /// Children in resolution order. Never sorted here — the order carries
    /// meaning for the hierarchical view.
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// A root node with no children yet.
    pub fn root(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: NodeKind::Root,
            omitted: false,
            children: Vec::new(),
        }
    }

    /// A configuration-root node with no children yet.
    pub fn configuration(name: &str) -> Self {
        Self {
            label: name.to_string(),
            kind: NodeKind::Configuration,
            omitted: false,
            children: Vec::new(),
        }
    }

    /// An artifact node with no children yet.
    pub fn artifact(label: &str, omitted: bool) -> Self {
        Self {
            label: label.to_string(),
            kind: NodeKind::Artifact,
            omitted,
            children: Vec::new(),
        }
    }

    /// Append a child, keeping resolution order.
    pub fn push_child(&mut self, child: DependencyNode) {
        self.children.push(child);
    }

    pub fn is_configuration_root(&self) -> bool {
        self.kind == NodeKind::Configuration
    }

    /// Walk this node and every transitive child in depth-first pre-order.
    ///
    /// The walk uses an explicit stack, so chain depth is limited by memory
    /// rather than the call stack, and it tracks visited node addresses so
    /// a malformed aliased graph cannot loop it forever. Well-formed trees
    /// never trip the guard.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self],
            visited: HashSet::new(),
        }
    }

    /// Total number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}

impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Depth-first pre-order iterator over a subtree. See [`DependencyNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a DependencyNode>,
    visited: HashSet<*const DependencyNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DependencyNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if !self.visited.insert(node as *const DependencyNode) {
                continue;
            }
            // Children pushed in reverse so they pop left-to-right.
            for child in node.children.iter().rev() {
                self.stack.push(child);
            }
            return Some(node);
        }
        None
    }
}
