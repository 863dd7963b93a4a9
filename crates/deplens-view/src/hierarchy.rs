//! The hierarchical view: a faithful structural copy of the resolved graph.

use deplens_core::node::DependencyNode;

use crate::views::ViewNode;

/// Copy the resolved tree 1:1 into the presentation node type.
///
/// Nothing is filtered, merged, or sorted: every duplicate occurrence and
/// every omitted node appears exactly where the resolver reported it. This
/// view exists so raw resolution (conflicts and all) can be read
/// side-by-side with the cleaned-up sorted view.
pub fn hierarchical_view(root: &DependencyNode) -> ViewNode {
    // Explicit frame stack instead of call-stack recursion, so pathological
    // chain depth costs heap, not stack frames. A frame is finished once its
    // child iterator runs dry; it then folds into its parent.
    let mut current = Frame::new(root);
    let mut stack: Vec<Frame<'_>> = Vec::new();

    loop {
        if let Some(child) = current.remaining.next() {
            stack.push(current);
            current = Frame::new(child);
            continue;
        }
        match stack.pop() {
            Some(mut parent) => {
                parent.out.children.push(current.out);
                current = parent;
            }
            None => return current.out,
        }
    }
}

struct Frame<'a> {
    out: ViewNode,
    remaining: std::slice::Iter<'a, DependencyNode>,
}

impl<'a> Frame<'a> {
    fn new(node: &'a DependencyNode) -> Self {
        Self {
            out: ViewNode::mirror(node),
            remaining: node.children.iter(),
        }
    }
}
