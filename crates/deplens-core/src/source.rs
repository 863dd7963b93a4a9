//! The abstract resolver boundary.

use crate::report::DependencyReport;
use deplens_util::errors::DeplensResult;

/// Anything able to produce the raw dependency mapping for a refresh.
///
/// Implementations hand over data that already exists — a report file, a
/// fixture, a test stub. Nothing behind this trait invokes a build tool;
/// how the report came to be is outside deplens.
pub trait DependencySource: Send + Sync {
    /// Load a fresh copy of the raw mapping.
    fn load(&self) -> DeplensResult<DependencyReport>;

    /// Human-readable description of where the data comes from.
    fn describe(&self) -> String;
}
