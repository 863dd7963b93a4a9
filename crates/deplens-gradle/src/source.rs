//! File-backed dependency source.

use std::path::{Path, PathBuf};

use deplens_core::report::DependencyReport;
use deplens_core::source::DependencySource;
use deplens_util::errors::{DeplensError, DeplensResult};

use crate::{json, text};

/// On-disk form of a dependency report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// The JSON interchange mapping.
    Json,
    /// Console output of Gradle's `dependencies` task.
    GradleText,
}

impl ReportFormat {
    /// Sniff the format: the file extension decides when it is `.json`,
    /// otherwise the content does (a JSON report is a bare object).
    pub fn detect(path: &Path, content: &str) -> Self {
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            return ReportFormat::Json;
        }
        if content.trim_start().starts_with('{') {
            return ReportFormat::Json;
        }
        ReportFormat::GradleText
    }
}

/// A [`DependencySource`] reading a report file on every load, so a watch
/// loop picks up whatever the file says right now.
pub struct FileSource {
    path: PathBuf,
    format: Option<ReportFormat>,
}

impl FileSource {
    /// Source that sniffs the format per load.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            format: None,
        }
    }

    /// Source pinned to a known format.
    pub fn with_format(path: &Path, format: ReportFormat) -> Self {
        Self {
            path: path.to_path_buf(),
            format: Some(format),
        }
    }
}

impl DependencySource for FileSource {
    fn load(&self) -> DeplensResult<DependencyReport> {
        let content = std::fs::read_to_string(&self.path).map_err(DeplensError::Io)?;
        let format = self
            .format
            .unwrap_or_else(|| ReportFormat::detect(&self.path, &content));
        tracing::debug!(path = %self.path.display(), ?format, "loading dependency report");
        match format {
            ReportFormat::Json => json::parse_report(&content),
            ReportFormat::GradleText => text::parse_report(&content),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
