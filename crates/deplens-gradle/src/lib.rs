//! Report ingestion for deplens.
//!
//! The view engine consumes a raw mapping ([`deplens_core::report::DependencyReport`])
//! and does not care where it came from. This crate supplies the shipped
//! ways of obtaining one without ever invoking a build tool: parsing the
//! text a Gradle `dependencies` task already printed, loading the JSON
//! interchange form, and a file-backed [`deplens_core::source::DependencySource`]
//! that sniffs which of the two it is looking at.

pub mod json;
pub mod source;
pub mod text;
