//! Operation: validate a report and show what it contains.

use std::path::Path;

use deplens_core::source::DependencySource;
use deplens_gradle::source::FileSource;
use deplens_util::progress::status;
use deplens_view::builder::build_graph;
use deplens_view::views::gather_stats;

/// Load a report, build the graph through full structural validation, and
/// report totals. Any parse or structure problem surfaces as the error it
/// is; nothing is rendered.
pub fn check(report: &Path) -> miette::Result<()> {
    let source = FileSource::new(report);
    status("Checking", &source.describe());

    let raw = source.load()?;
    let root = build_graph(&raw)?;
    let stats = gather_stats(&root);

    let occurrences: usize = stats.configurations.iter().map(|c| c.occurrences).sum();
    let omitted: usize = stats.configurations.iter().map(|c| c.omitted).sum();
    status(
        "Checked",
        &format!(
            "{} configurations, {} artifact occurrences, {} omitted",
            stats.configurations.len(),
            occurrences,
            omitted
        ),
    );
    Ok(())
}
