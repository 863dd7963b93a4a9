//! Core data types for deplens.
//!
//! This crate defines the fundamental types for modeling a build tool's
//! resolved dependency graph: the dependency node tree, the raw resolver
//! report the tree is built from, artifact coordinates, and the abstract
//! source boundary a report arrives through.
//!
//! This crate is intentionally free of async code and file I/O.

pub mod coordinate;
pub mod node;
pub mod report;
pub mod source;
