//! Shared utilities for deplens.
//!
//! This crate provides the cross-cutting concerns used by all other deplens
//! crates: the unified error type and Cargo-style terminal status lines.

pub mod errors;
pub mod progress;
