//! Command implementations
//!
//! Each command is an `impl Comparator` block that loads its inputs, runs the
//! engine and writes the result through the comparator's writer:
//!
//! - `ndiff`: line delta with intraline markers
//! - `unified`: unified and context diffs
//! - `restore`: one side of a saved delta
//! - `ratio`: similarity scores of two files
//! - `close`: close matches for a word
//! - `dir`: name-status comparison of two directory trees

pub mod close;
pub mod dir;
pub mod ndiff;
pub mod ratio;
pub mod restore;
pub mod unified;
