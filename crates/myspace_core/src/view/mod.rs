//! Derived views over record collections.
//!
//! # Responsibility
//! - Filter/sort projections recomputed on demand from store snapshots.
//! - Presentation transforms (content truncation, count labels).
//!
//! # Invariants
//! - Every function here is pure; input slices are never mutated.
//! - Sorting is stable, so collection order breaks ties.

pub mod logs;
pub mod notes;
pub mod stats;
pub mod todos;
