//! JSON report loading.

use deplens_core::report::DependencyReport;
use deplens_util::errors::{DeplensError, DeplensResult};

/// Parse the JSON interchange form of a dependency report: a bare object
/// mapping configuration names (and `"root"`) to dependency descriptions.
pub fn parse_report(content: &str) -> DeplensResult<DependencyReport> {
    serde_json::from_str(content).map_err(|e| {
        DeplensError::Report {
            message: format!("invalid JSON report: {e}"),
        }
        .into()
    })
}
