//! Myers matching constrained by synchronization points
//!
//! Each sync point `(a, b)` forces position `a` of A to line up with position
//! `b` of B. The sequences are cut into chunks at every point and each chunk
//! pair is matched on its own with a fresh [`MyersSequenceMatcher`].
//!
//! Two views of the result are kept:
//!
//! - the flattened block list, where a block ending exactly on a sync point is
//!   joined with a block starting there, used for `matching_blocks` and ratios
//! - the per-chunk block lists, used to derive opcodes so that no chunk
//!   spans a sync boundary

use crate::artifacts::matching::chunk::{Match, Opcode};
use crate::artifacts::matching::myers::MyersSequenceMatcher;
use crate::artifacts::matching::{SequenceMatcher, opcodes_from_blocks};
use crate::errors::{DiffError, DiffResult};
use std::cell::OnceCell;
use std::hash::Hash;
use tracing::debug;

/// One chunk pair cut out of A and B, with its offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncChunk {
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

#[derive(Debug, Default)]
struct SplitBlocks {
    merged: Vec<Match>,
    per_chunk: Vec<Vec<Match>>,
}

pub struct SyncPointMyersSequenceMatcher<'s, T> {
    a: &'s [T],
    b: &'s [T],
    sync_points: Vec<(usize, usize)>,
    blocks: OnceCell<SplitBlocks>,
    opcodes: OnceCell<Vec<Opcode>>,
}

impl<'s, T: Eq + Hash> SyncPointMyersSequenceMatcher<'s, T> {
    /// Fails with [`DiffError::InvalidArgument`] unless the points are
    /// non-decreasing in both coordinates and lie within the sequences.
    pub fn new(a: &'s [T], b: &'s [T], sync_points: Vec<(usize, usize)>) -> DiffResult<Self> {
        validate_sync_points(&sync_points, a.len(), b.len())?;
        Ok(Self {
            a,
            b,
            sync_points,
            blocks: OnceCell::new(),
            opcodes: OnceCell::new(),
        })
    }

    /// Replaces A; the sync points must still fit, otherwise nothing changes.
    pub fn set_seq1(&mut self, a: &'s [T]) -> DiffResult<()> {
        validate_sync_points(&self.sync_points, a.len(), self.b.len())?;
        self.a = a;
        self.reset();
        Ok(())
    }

    /// Replaces B; the sync points must still fit, otherwise nothing changes.
    pub fn set_seq2(&mut self, b: &'s [T]) -> DiffResult<()> {
        validate_sync_points(&self.sync_points, self.a.len(), b.len())?;
        self.b = b;
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.blocks = OnceCell::new();
        self.opcodes = OnceCell::new();
    }

    /// The chunk pairs matched independently, in order.
    pub fn chunks(&self) -> Vec<SyncChunk> {
        let (mut ai, mut bi) = (0, 0);
        let mut chunks = Vec::with_capacity(self.sync_points.len() + 1);
        for &(aj, bj) in &self.sync_points {
            chunks.push(SyncChunk {
                a_start: ai,
                a_end: aj,
                b_start: bi,
                b_end: bj,
            });
            (ai, bi) = (aj, bj);
        }
        if ai < self.a.len() || bi < self.b.len() {
            chunks.push(SyncChunk {
                a_start: ai,
                a_end: self.a.len(),
                b_start: bi,
                b_end: self.b.len(),
            });
        }
        chunks
    }

    fn split_blocks(&self) -> &SplitBlocks {
        self.blocks.get_or_init(|| self.compute_blocks())
    }

    fn compute_blocks(&self) -> SplitBlocks {
        if self.sync_points.is_empty() {
            let blocks = MyersSequenceMatcher::new(self.a, self.b)
                .matching_blocks()
                .to_vec();
            return SplitBlocks {
                merged: blocks.clone(),
                per_chunk: vec![blocks],
            };
        }

        let mut split = SplitBlocks::default();
        for chunk in self.chunks() {
            let matcher = MyersSequenceMatcher::new(
                &self.a[chunk.a_start..chunk.a_end],
                &self.b[chunk.b_start..chunk.b_end],
            );
            let Some((_, found)) = matcher.matching_blocks().split_last() else {
                continue;
            };

            let mut local: Vec<Match> = found
                .iter()
                .map(|m| m.offset(chunk.a_start, chunk.b_start))
                .collect();

            let mut fresh = local.as_slice();
            if let (Some(last), Some(first)) = (split.merged.last_mut(), local.first())
                && last.a_end() == first.a
                && last.b_end() == first.b
                && first.a == chunk.a_start
                && first.b == chunk.b_start
            {
                last.size += first.size;
                fresh = &local[1..];
            }
            split.merged.extend_from_slice(fresh);

            local.push(Match::new(chunk.a_end, chunk.b_end, 0));
            split.per_chunk.push(local);
        }
        split
            .merged
            .push(Match::new(self.a.len(), self.b.len(), 0));

        debug!(
            chunks = split.per_chunk.len(),
            blocks = split.merged.len(),
            "sync point matching"
        );
        split
    }
}

fn validate_sync_points(points: &[(usize, usize)], a_len: usize, b_len: usize) -> DiffResult<()> {
    let mut previous = (0, 0);
    for &(ai, bi) in points {
        if ai > a_len || bi > b_len {
            return Err(DiffError::invalid_argument(format!(
                "sync point ({ai}, {bi}) lies outside sequences of length {a_len} and {b_len}"
            )));
        }
        if ai < previous.0 || bi < previous.1 {
            return Err(DiffError::invalid_argument(format!(
                "sync point ({ai}, {bi}) precedes ({}, {})",
                previous.0, previous.1
            )));
        }
        previous = (ai, bi);
    }
    Ok(())
}

impl<T: Eq + Hash> SequenceMatcher<T> for SyncPointMyersSequenceMatcher<'_, T> {
    fn sequences(&self) -> (&[T], &[T]) {
        (self.a, self.b)
    }

    fn matching_blocks(&self) -> &[Match] {
        &self.split_blocks().merged
    }

    fn opcodes(&self) -> &[Opcode] {
        self.opcodes.get_or_init(|| {
            // each chunk list ends on a zero-size block at the chunk's end, so
            // replaying them in order restarts the gap detection at every seam
            let replay: Vec<Match> = self
                .split_blocks()
                .per_chunk
                .iter()
                .flatten()
                .copied()
                .collect();
            opcodes_from_blocks(&replay)
        })
    }
}
