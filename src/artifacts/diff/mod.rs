//! Consumers of matcher output
//!
//! - `differ`: `ndiff`-style line deltas with intraline markers, and `restore`
//! - `format`: unified and context diff text
//! - `close_matches`: ranking candidate strings by similarity
//! - `dir_diff`: added/deleted/modified classification of two directory trees

pub mod close_matches;
pub mod differ;
pub mod dir_diff;
pub mod format;
