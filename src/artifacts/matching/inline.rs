//! Myers matcher tuned for intraline (character level) comparison
//!
//! Single characters coincide far too often to be useful anchors, so the
//! discard step keeps a character only if it belongs to some 3-gram that also
//! occurs in the other sequence. This stops unrelated lone characters from
//! being glued together and gives much cleaner change highlighting.

use crate::artifacts::matching::myers::{DiscardStrategy, Discarded, MyersMatcher};
use std::collections::HashSet;
use std::hash::Hash;

/// Length of the k-mers used to decide which elements are kept.
pub const KMER_LEN: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct KmerDiscard;

impl KmerDiscard {
    /// Positions of `haystack` covered by a k-mer that also occurs in `needles`,
    /// each position recorded once even when k-mers overlap.
    fn covered_positions<T: Eq + Hash>(needles: &[T], haystack: &[T]) -> Vec<usize> {
        let kmers: HashSet<&[T]> = needles.windows(KMER_LEN).collect();
        let mut positions = Vec::new();
        let mut next_uncovered = 0;

        for (start, window) in haystack.windows(KMER_LEN).enumerate() {
            if !kmers.contains(window) {
                continue;
            }
            positions.extend(next_uncovered.max(start)..start + KMER_LEN);
            next_uncovered = start + KMER_LEN;
        }

        positions
    }
}

impl<T: Eq + Hash> DiscardStrategy<T> for KmerDiscard {
    fn discard(&self, a: &[T], b: &[T]) -> Option<Discarded> {
        if a.len() < KMER_LEN && b.len() < KMER_LEN {
            return None;
        }

        let discarded = Discarded {
            aindex: Self::covered_positions(b, a),
            bindex: Self::covered_positions(a, b),
        };
        discarded
            .is_worthwhile(a.len(), b.len())
            .then_some(discarded)
    }
}

pub type InlineMyersSequenceMatcher<'s, T> = MyersMatcher<'s, T, KmerDiscard>;
