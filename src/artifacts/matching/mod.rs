//! Sequence matchers
//!
//! Every matcher aligns two immutable sequences A and B and exposes the result
//! through the [`SequenceMatcher`] contract:
//!
//! - `classic`: longest-matching-block matcher with junk and popular-element filtering
//! - `myers`: Myers-style shortest edit script with prefix/suffix stripping and
//!   non-matching element discarding
//! - `inline`: Myers variant that discards by 3-gram membership, for intraline diffs
//! - `sync_point`: Myers variant split at caller-supplied synchronization points
//!
//! Results are memoized inside each matcher until one of its sequences changes.

pub mod chunk;
pub mod classic;
pub mod inline;
pub mod junk;
pub mod myers;
pub mod sync_point;

use crate::Algorithm;
use crate::errors::{DiffError, DiffResult};
use chunk::{Match, Opcode, Tag};
use classic::ClassicSequenceMatcher;
use inline::InlineMyersSequenceMatcher;
use junk::JunkPredicate;
use myers::MyersSequenceMatcher;
use std::collections::HashMap;
use std::hash::Hash;

/// Context lines kept around each change by the grouped formatters.
pub const DEFAULT_CONTEXT: usize = 3;

/// Junk handling shared by every matcher constructor.
#[derive(Clone, Copy)]
pub struct MatcherConfig<'p, T> {
    pub is_junk: Option<JunkPredicate<'p, T>>,
    pub autojunk: bool,
}

impl<T> Default for MatcherConfig<'_, T> {
    fn default() -> Self {
        Self {
            is_junk: None,
            autojunk: true,
        }
    }
}

impl<'p, T> MatcherConfig<'p, T> {
    pub fn with_junk(is_junk: JunkPredicate<'p, T>) -> Self {
        Self {
            is_junk: Some(is_junk),
            autojunk: true,
        }
    }

    pub fn autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }
}

pub trait SequenceMatcher<T: Eq + Hash> {
    /// The two sequences being compared, A then B.
    fn sequences(&self) -> (&[T], &[T]);

    /// Matching blocks in increasing order, terminated by `(len(a), len(b), 0)`.
    fn matching_blocks(&self) -> &[Match];

    /// Edit script covering both sequences contiguously.
    fn opcodes(&self) -> &[Opcode];

    /// Opcodes clustered into hunks with at most `context` equal elements
    /// around each change.
    fn grouped_opcodes(&self, context: usize) -> Vec<Vec<Opcode>> {
        group_opcodes(self.opcodes(), context)
    }

    /// The opcodes that actually change something.
    fn difference_opcodes(&self) -> Vec<Opcode> {
        self.opcodes()
            .iter()
            .filter(|op| op.tag != Tag::Equal)
            .copied()
            .collect()
    }

    /// Similarity in `[0, 1]`: `2 * matches / (len(a) + len(b))`.
    fn ratio(&self) -> f64 {
        let (a, b) = self.sequences();
        let matches: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        calculate_ratio(matches, a.len() + b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) ignoring element order.
    fn quick_ratio(&self) -> f64 {
        let (a, b) = self.sequences();
        let mut available: HashMap<&T, usize> = HashMap::new();
        for elt in b {
            *available.entry(elt).or_default() += 1;
        }
        calculate_ratio(multiset_intersection(a, available), a.len() + b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone.
    fn real_quick_ratio(&self) -> f64 {
        let (a, b) = self.sequences();
        calculate_ratio(a.len().min(b.len()), a.len() + b.len())
    }
}

pub fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / length as f64
}

/// Counts elements of `a` that can be paired with a distinct element counted in `available`.
pub(crate) fn multiset_intersection<'s, T: Eq + Hash>(
    a: &'s [T],
    mut available: HashMap<&'s T, usize>,
) -> usize {
    let mut matches = 0;
    for elt in a {
        if let Some(count) = available.get_mut(elt)
            && *count > 0
        {
            *count -= 1;
            matches += 1;
        }
    }
    matches
}

/// Turns a sentinel-terminated matching-block list into a contiguous edit script.
pub fn opcodes_from_blocks(blocks: &[Match]) -> Vec<Opcode> {
    let mut opcodes = Vec::new();
    let (mut i, mut j) = (0, 0);

    for block in blocks {
        let tag = match (i < block.a, j < block.b) {
            (true, true) => Some(Tag::Replace),
            (true, false) => Some(Tag::Delete),
            (false, true) => Some(Tag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            opcodes.push(Opcode::new(tag, i, block.a, j, block.b));
        }

        (i, j) = (block.a_end(), block.b_end());
        if !block.is_empty() {
            opcodes.push(Opcode::new(Tag::Equal, block.a, i, block.b, j));
        }
    }

    opcodes
}

/// Splits an edit script into hunks.
///
/// Leading and trailing equal runs are clipped to `context` elements, and any
/// equal run longer than `2 * context` closes the current hunk.
pub fn group_opcodes(opcodes: &[Opcode], context: usize) -> Vec<Vec<Opcode>> {
    let mut codes = opcodes.to_vec();
    if codes.is_empty() {
        codes.push(Opcode::new(Tag::Equal, 0, 1, 0, 1));
    }

    if let Some(first) = codes.first_mut()
        && first.tag == Tag::Equal
    {
        first.a_start = first.a_start.max(first.a_end.saturating_sub(context));
        first.b_start = first.b_start.max(first.b_end.saturating_sub(context));
    }
    if let Some(last) = codes.last_mut()
        && last.tag == Tag::Equal
    {
        last.a_end = last.a_end.min(last.a_start + context);
        last.b_end = last.b_end.min(last.b_start + context);
    }

    let mut groups = Vec::new();
    let mut group = Vec::new();
    for mut op in codes {
        if op.tag == Tag::Equal && op.a_len() > 2 * context {
            group.push(Opcode::new(
                Tag::Equal,
                op.a_start,
                op.a_end.min(op.a_start + context),
                op.b_start,
                op.b_end.min(op.b_start + context),
            ));
            groups.push(std::mem::take(&mut group));
            op.a_start = op.a_start.max(op.a_end.saturating_sub(context));
            op.b_start = op.b_start.max(op.b_end.saturating_sub(context));
        }
        group.push(op);
    }

    if !(group.is_empty() || group.len() == 1 && group[0].tag == Tag::Equal) {
        groups.push(group);
    }

    groups
}

/// Builds the matcher selected by `algorithm`.
///
/// The Myers family takes no junk predicate; asking for one is an
/// [`DiffError::UnsupportedConfiguration`].
pub fn build_matcher<'s, T: Eq + Hash>(
    algorithm: Algorithm,
    a: &'s [T],
    b: &'s [T],
    config: MatcherConfig<'s, T>,
) -> DiffResult<Box<dyn SequenceMatcher<T> + 's>> {
    if algorithm != Algorithm::Classic && config.is_junk.is_some() {
        return Err(DiffError::unsupported(format!(
            "the {algorithm} matcher does not accept a junk predicate"
        )));
    }

    Ok(match algorithm {
        Algorithm::Classic => Box::new(ClassicSequenceMatcher::with_config(a, b, config)),
        Algorithm::Myers => Box::new(MyersSequenceMatcher::new(a, b)),
        Algorithm::InlineMyers => Box::new(InlineMyersSequenceMatcher::new(a, b)),
    })
}
