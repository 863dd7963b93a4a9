use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all deplens operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DeplensError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The raw resolver mapping has no "root" entry.
    #[error("dependency report contains no \"root\" entry")]
    #[diagnostic(help("the resolver output must map \"root\" to the full dependency tree"))]
    MissingRoot,

    /// Report content could not be parsed (invalid JSON, malformed tree text).
    #[error("Report error: {message}")]
    #[diagnostic(help("check that the input is a dependency report in JSON or Gradle text form"))]
    Report { message: String },

    /// The dependency tree violates a structural invariant.
    #[error("Structure error: {message}")]
    Structure { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DeplensResult<T> = miette::Result<T>;
