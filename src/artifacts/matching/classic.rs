//! Longest-matching-block sequence matcher
//!
//! ## Algorithm Overview
//!
//! 1. Index B by element, dropping junk and popular elements ([`JunkClassifier`]).
//! 2. Find the longest junk-free run common to both sequences, then grow it
//!    through adjacent equal non-junk elements and finally through adjacent
//!    equal junk, so junk touching a real match is absorbed into it.
//! 3. Recurse on the regions left and right of that run (with a worklist,
//!    never the call stack) until no match remains.
//! 4. Sort, merge adjacent runs, and terminate with `(len(a), len(b), 0)`.
//!
//! Common prefixes and suffixes are *not* stripped up front, so the
//! alignment matches the longest-block subdivision on the full ranges.
//!
//! Worst case is quadratic, but junk and popular filtering keep typical inputs
//! close to linear.

use crate::artifacts::matching::chunk::{Match, Opcode};
use crate::artifacts::matching::junk::{JunkClassifier, JunkPredicate};
use crate::artifacts::matching::{
    MatcherConfig, SequenceMatcher, calculate_ratio, multiset_intersection, opcodes_from_blocks,
};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

pub struct ClassicSequenceMatcher<'s, T: Eq + Hash> {
    a: &'s [T],
    b: &'s [T],
    is_junk: Option<JunkPredicate<'s, T>>,
    autojunk: bool,
    classifier: JunkClassifier<'s, T>,
    full_b_count: OnceCell<HashMap<&'s T, usize>>,
    matching_blocks: OnceCell<Vec<Match>>,
    opcodes: OnceCell<Vec<Opcode>>,
}

impl<'s, T: Eq + Hash> ClassicSequenceMatcher<'s, T> {
    pub fn new(a: &'s [T], b: &'s [T]) -> Self {
        Self::with_config(a, b, MatcherConfig::default())
    }

    pub fn with_junk(is_junk: JunkPredicate<'s, T>, a: &'s [T], b: &'s [T]) -> Self {
        Self::with_config(a, b, MatcherConfig::with_junk(is_junk))
    }

    pub fn with_config(a: &'s [T], b: &'s [T], config: MatcherConfig<'s, T>) -> Self {
        Self {
            a,
            b,
            is_junk: config.is_junk,
            autojunk: config.autojunk,
            classifier: JunkClassifier::new(b, config.is_junk, config.autojunk),
            full_b_count: OnceCell::new(),
            matching_blocks: OnceCell::new(),
            opcodes: OnceCell::new(),
        }
    }

    pub fn set_seqs(&mut self, a: &'s [T], b: &'s [T]) {
        self.set_seq1(a);
        self.set_seq2(b);
    }

    /// Replaces A; the index over B is kept.
    pub fn set_seq1(&mut self, a: &'s [T]) {
        if std::ptr::eq(self.a, a) {
            return;
        }
        self.a = a;
        self.invalidate();
    }

    /// Replaces B and rebuilds the junk classification.
    pub fn set_seq2(&mut self, b: &'s [T]) {
        if std::ptr::eq(self.b, b) {
            return;
        }
        self.b = b;
        self.classifier = JunkClassifier::new(b, self.is_junk, self.autojunk);
        self.full_b_count = OnceCell::new();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.matching_blocks = OnceCell::new();
        self.opcodes = OnceCell::new();
    }

    pub fn junk(&self) -> &JunkClassifier<'s, T> {
        &self.classifier
    }

    /// Longest match over the whole of both sequences.
    pub fn longest_match(&self) -> Match {
        self.find_longest_match(0, self.a.len(), 0, self.b.len())
    }

    /// Longest matching run within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long runs the one starting earliest in A wins, then the
    /// one starting earliest in B. Returns a zero-sized match at `(alo, blo)`
    /// when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let bjunk = self.classifier.bjunk();
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending with a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, elt) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut new_j2len = HashMap::new();
            for &j in self.classifier.positions(elt) {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                new_j2len.insert(j, k);
                if k > bestsize {
                    (besti, bestj, bestsize) = (i + 1 - k, j + 1 - k, k);
                }
            }
            j2len = new_j2len;
        }

        let extends_back = |i: usize, j: usize, junk: bool| {
            i > alo && j > blo && bjunk.contains(&b[j - 1]) == junk && a[i - 1] == b[j - 1]
        };
        let extends_forward = |i: usize, j: usize, size: usize, junk: bool| {
            i + size < ahi
                && j + size < bhi
                && bjunk.contains(&b[j + size]) == junk
                && a[i + size] == b[j + size]
        };

        for junk in [false, true] {
            while extends_back(besti, bestj, junk) {
                (besti, bestj, bestsize) = (besti - 1, bestj - 1, bestsize + 1);
            }
            while extends_forward(besti, bestj, bestsize, junk) {
                bestsize += 1;
            }
        }

        Match::new(besti, bestj, bestsize)
    }

    fn compute_matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut found = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.is_empty() {
                continue;
            }
            found.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a_end() < ahi && m.b_end() < bhi {
                queue.push((m.a_end(), ahi, m.b_end(), bhi));
            }
        }
        found.sort();

        let mut blocks = Vec::with_capacity(found.len() + 1);
        let mut current = Match::default();
        for m in found {
            if current.a_end() == m.a && current.b_end() == m.b {
                current.size += m.size;
            } else {
                if !current.is_empty() {
                    blocks.push(current);
                }
                current = m;
            }
        }
        if !current.is_empty() {
            blocks.push(current);
        }
        blocks.push(Match::new(la, lb, 0));

        trace!(a_len = la, b_len = lb, blocks = blocks.len() - 1, "matched");
        blocks
    }
}

impl<T: Eq + Hash> SequenceMatcher<T> for ClassicSequenceMatcher<'_, T> {
    fn sequences(&self) -> (&[T], &[T]) {
        (self.a, self.b)
    }

    fn matching_blocks(&self) -> &[Match] {
        self.matching_blocks
            .get_or_init(|| self.compute_matching_blocks())
    }

    fn opcodes(&self) -> &[Opcode] {
        self.opcodes
            .get_or_init(|| opcodes_from_blocks(self.matching_blocks()))
    }

    /// Same bound as the default, with B's element counts cached across calls.
    fn quick_ratio(&self) -> f64 {
        let counts = self.full_b_count.get_or_init(|| {
            let mut counts = HashMap::new();
            for elt in self.b {
                *counts.entry(elt).or_default() += 1;
            }
            counts
        });
        let matches = multiset_intersection(self.a, counts.clone());
        calculate_ratio(matches, self.a.len() + self.b.len())
    }
}
