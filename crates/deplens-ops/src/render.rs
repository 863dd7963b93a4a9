//! Text rendering of view trees.
//!
//! Pure functions from a [`ViewNode`] to a string; the operations decide
//! where the string goes. Styling degrades to plain text when stdout is
//! not a terminal.

use console::style;

use deplens_view::views::ViewNode;

/// Render the hierarchical view with box-drawing connectors, one line per
/// occurrence, conflict losers annotated `(omitted)` and dimmed.
///
/// `max_depth` caps the display only; the view itself is already complete.
pub fn render_tree(view: &ViewNode, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str(&view.label);
    out.push('\n');

    // (node, prefix, is_last, depth), pushed in reverse so siblings render
    // left-to-right. The root sits at depth 0, so a cap of 0 shows only
    // the root line.
    let mut stack: Vec<(&ViewNode, String, bool, usize)> = Vec::new();
    if max_depth.map_or(true, |max| max > 0) {
        push_children(&mut stack, view, "", 1);
    }

    while let Some((node, prefix, is_last, depth)) = stack.pop() {
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(&prefix);
        out.push_str(connector);
        out.push_str(&node.label);
        if node.omitted {
            out.push(' ');
            out.push_str(&style("(omitted)").dim().to_string());
        }
        out.push('\n');

        if let Some(max) = max_depth {
            if depth >= max {
                continue;
            }
        }
        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        push_children(&mut stack, node, &child_prefix, depth + 1);
    }

    out
}

fn push_children<'a>(
    stack: &mut Vec<(&'a ViewNode, String, bool, usize)>,
    node: &'a ViewNode,
    prefix: &str,
    depth: usize,
) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), i == count - 1, depth));
    }
}

/// Render the sorted view: one block per configuration, artifacts indented
/// beneath the configuration name.
pub fn render_sorted(view: &ViewNode) -> String {
    let mut out = String::new();
    for (i, configuration) in view.children.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&configuration.label);
        out.push('\n');
        if configuration.children.is_empty() {
            out.push_str("  (no dependencies)\n");
            continue;
        }
        for artifact in &configuration.children {
            out.push_str("  ");
            out.push_str(&artifact.label);
            out.push('\n');
        }
    }
    out
}
