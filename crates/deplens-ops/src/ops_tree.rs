//! Operation: display the hierarchical dependency view.

use std::path::Path;

use deplens_util::errors::DeplensError;

use crate::{load_views, render, OutputFormat};

/// Options for `deplens tree`.
pub struct TreeOptions {
    /// Maximum tree depth to display (display-only, the view is complete).
    pub depth: Option<usize>,
    pub format: OutputFormat,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            depth: None,
            format: OutputFormat::Text,
        }
    }
}

/// Print the resolved graph exactly as reported: every duplicate, every
/// conflict loser, in resolution order.
pub fn tree(report: &Path, opts: &TreeOptions) -> miette::Result<()> {
    let views = load_views(report)?;
    match opts.format {
        OutputFormat::Text => print!("{}", render::render_tree(&views.hierarchical, opts.depth)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&views.hierarchical).map_err(|e| {
                DeplensError::Generic {
                    message: format!("failed to serialize view: {e}"),
                }
            })?;
            println!("{json}");
        }
    }
    Ok(())
}
