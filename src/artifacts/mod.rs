//! Diffing algorithms and value types
//!
//! - `core`: shared output plumbing (pager wrapper)
//! - `diff`: line deltas, diff formatters, close matches, directory comparison
//! - `matching`: sequence matchers and the opcodes they produce

pub mod core;
pub mod diff;
pub mod matching;
