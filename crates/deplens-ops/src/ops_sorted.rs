//! Operation: display the sorted per-configuration view.

use std::path::Path;

use deplens_util::errors::DeplensError;

use crate::{load_views, render, OutputFormat};

/// Options for `deplens sorted`.
pub struct SortedOptions {
    pub format: OutputFormat,
}

impl Default for SortedOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

/// Print the deduplicated, alphabetically sorted view: one block per
/// configuration, conflict losers hidden.
pub fn sorted(report: &Path, opts: &SortedOptions) -> miette::Result<()> {
    let views = load_views(report)?;
    match opts.format {
        OutputFormat::Text => print!("{}", render::render_sorted(&views.sorted)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&views.sorted).map_err(|e| {
                DeplensError::Generic {
                    message: format!("failed to serialize view: {e}"),
                }
            })?;
            println!("{json}");
        }
    }
    Ok(())
}
