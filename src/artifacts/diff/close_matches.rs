//! Ranking candidate strings by similarity to a word
//!
//! The word is fixed as sequence B of a single character-level classic matcher
//! so its junk classification is built once; each candidate then only replaces
//! sequence A. Candidates go through the three ratio bounds in increasing cost
//! and are kept when all of them reach the cutoff.

use crate::artifacts::matching::SequenceMatcher;
use crate::artifacts::matching::classic::ClassicSequenceMatcher;
use crate::errors::{DiffError, DiffResult};
use std::cmp::Ordering;
use tracing::debug;

pub const DEFAULT_MATCH_COUNT: usize = 3;
pub const DEFAULT_CUTOFF: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseMatch<'w> {
    pub word: &'w str,
    pub score: f64,
}

fn validate(n: usize, cutoff: f64) -> DiffResult<()> {
    if n == 0 {
        return Err(DiffError::invalid_argument("n must be greater than 0"));
    }
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(DiffError::invalid_argument(format!(
            "cutoff must be in [0.0, 1.0], got {cutoff}"
        )));
    }
    Ok(())
}

/// The best `n` candidates scoring at least `cutoff`, best first.
///
/// Ties on score are ordered by the candidate itself, greatest first.
pub fn rank_close_matches<'w, S: AsRef<str>>(
    word: &str,
    possibilities: &'w [S],
    n: usize,
    cutoff: f64,
) -> DiffResult<Vec<CloseMatch<'w>>> {
    validate(n, cutoff)?;

    let word_chars: Vec<char> = word.chars().collect();
    let candidates: Vec<Vec<char>> = possibilities
        .iter()
        .map(|candidate| candidate.as_ref().chars().collect())
        .collect();

    let mut matcher = ClassicSequenceMatcher::new(&[], &word_chars);
    let mut ranked = Vec::new();
    for (candidate, chars) in possibilities.iter().zip(&candidates) {
        matcher.set_seq1(chars);
        if matcher.real_quick_ratio() >= cutoff
            && matcher.quick_ratio() >= cutoff
            && matcher.ratio() >= cutoff
        {
            ranked.push(CloseMatch {
                word: candidate.as_ref(),
                score: matcher.ratio(),
            });
        }
    }

    ranked.sort_by(|l, r| match r.score.total_cmp(&l.score) {
        Ordering::Equal => r.word.cmp(l.word),
        ordering => ordering,
    });
    ranked.truncate(n);

    debug!(
        candidates = possibilities.len(),
        kept = ranked.len(),
        "ranked close matches"
    );
    Ok(ranked)
}

/// Candidates close enough to `word`, best first.
///
/// Fails with [`DiffError::InvalidArgument`] when `n` is zero or `cutoff` is
/// outside `[0, 1]`.
pub fn get_close_matches<'w, S: AsRef<str>>(
    word: &str,
    possibilities: &'w [S],
    n: usize,
    cutoff: f64,
) -> DiffResult<Vec<&'w str>> {
    Ok(rank_close_matches(word, possibilities, n, cutoff)?
        .into_iter()
        .map(|m| m.word)
        .collect())
}
