//! Sequence diffing engine
//!
//! - `artifacts::matching`: sequence matchers (classic, Myers, inline, sync point)
//! - `artifacts::diff`: line deltas, unified/context formatting, close matches,
//!   directory comparison
//! - `areas`: file access and the output-owning [`Comparator`](areas::comparator::Comparator)
//! - `commands`: one command-line operation per file

use clap::ValueEnum;
use std::fmt;

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Which matcher aligns the sequences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Longest matching blocks with junk filtering
    #[default]
    Classic,
    /// Shortest edit script
    Myers,
    /// Shortest edit script anchored on shared 3-grams
    InlineMyers,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Classic => "classic",
            Algorithm::Myers => "myers",
            Algorithm::InlineMyers => "inline-myers",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Always,
    Never,
    #[default]
    Auto,
}
