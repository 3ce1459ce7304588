//! Stateful outer components
//!
//! - `comparator`: owns the output writer and runs commands
//! - `workspace`: file system access relative to a root directory

pub mod comparator;
pub mod workspace;
