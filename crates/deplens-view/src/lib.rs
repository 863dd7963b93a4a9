//! View derivation engine for deplens: builds the hierarchical dependency
//! tree from a raw resolver report and derives the two presentation views
//! from it — the faithful hierarchical copy and the per-configuration
//! sorted, deduplicated, omission-filtered flat view.

pub mod builder;
pub mod hierarchy;
pub mod ordering;
pub mod session;
pub mod sorted;
pub mod views;
