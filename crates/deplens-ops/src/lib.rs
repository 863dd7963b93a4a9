pub mod ops_check;
pub mod ops_sorted;
pub mod ops_summary;
pub mod ops_tree;
pub mod render;

use std::path::Path;

use deplens_core::source::DependencySource;
use deplens_gradle::source::FileSource;
use deplens_util::errors::DeplensError;
use deplens_view::builder::build_graph;
use deplens_view::views::ResolvedViews;

/// How an operation writes its result to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse a `--format` value.
pub fn parse_format(value: &str) -> miette::Result<OutputFormat> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(DeplensError::Generic {
            message: format!("unknown output format '{other}' (expected text or json)"),
        }
        .into()),
    }
}

/// Load a report file, build the graph, derive both views. The shared
/// front half of every operation.
pub fn load_views(report: &Path) -> miette::Result<ResolvedViews> {
    let source = FileSource::new(report);
    let raw = source.load()?;
    let root = build_graph(&raw)?;
    tracing::debug!(nodes = root.node_count(), "derived views from {}", source.describe());
    Ok(ResolvedViews::derive(&root))
}
