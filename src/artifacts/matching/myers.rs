//! Myers shortest-edit-script matcher
//!
//! ## Algorithm Overview
//!
//! ### Preprocessing
//!
//! - Strip the common prefix, then (if both remainders are non-empty) the
//!   common suffix.
//! - Optionally discard elements that cannot match anything on the other side
//!   ([`DiscardStrategy`]). The compacted sequences are only used when the
//!   discard removes more than [`DISCARD_THRESHOLD`] elements from either side.
//!
//! ### Search
//!
//! The O(NP) greedy search of Wu, Manber, Myers and Miller: for increasing
//! `p`, extend the furthest-reaching point on every diagonal from both ends
//! towards the sink diagonal `delta`, following snakes (diagonal runs of equal
//! elements). Each snake found is recorded in an arena of [`Snake`] records
//! whose `predecessor` is the index of the snake preceding it on the path.
//!
//! ### Reconstruction
//!
//! The snake chain ending at the sink is walked backwards. Snakes found in
//! compacted coordinates are mapped through the index maps and split wherever
//! the original positions are not contiguous. The prefix and suffix blocks and
//! the sentinel are added.
//!
//! ### Postprocessing
//!
//! Blocks that touch in either sequence and whose preceding slices are equal
//! are merged, removing seams left behind by the discard step.

use crate::artifacts::matching::chunk::{Match, Opcode};
use crate::artifacts::matching::{SequenceMatcher, opcodes_from_blocks};
use std::cell::OnceCell;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, trace};

/// Discarding only pays off once more than this many elements go.
pub const DISCARD_THRESHOLD: usize = 10;

/// Elements of both sequences kept for the search, with their original positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded {
    pub aindex: Vec<usize>,
    pub bindex: Vec<usize>,
}

impl Discarded {
    pub fn is_worthwhile(&self, a_len: usize, b_len: usize) -> bool {
        a_len - self.aindex.len() > DISCARD_THRESHOLD
            || b_len - self.bindex.len() > DISCARD_THRESHOLD
    }
}

/// Decides which elements can take part in a match before the search runs.
pub trait DiscardStrategy<T> {
    /// Positions of `a` and `b` worth keeping, or `None` when nothing should be discarded.
    fn discard(&self, a: &[T], b: &[T]) -> Option<Discarded>;
}

/// Keeps an element only if it occurs somewhere in the other sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDiscard;

impl<T: Eq + Hash> DiscardStrategy<T> for LineDiscard {
    fn discard(&self, a: &[T], b: &[T]) -> Option<Discarded> {
        if a.is_empty() || b.is_empty() {
            return None;
        }

        fn matching_positions<T: Eq + Hash>(needles: &[T], haystack: &[T]) -> Vec<usize> {
            let needles: HashSet<&T> = needles.iter().collect();
            haystack
                .iter()
                .enumerate()
                .filter(|(_, elt)| needles.contains(elt))
                .map(|(i, _)| i)
                .collect()
        }

        let discarded = Discarded {
            aindex: matching_positions(b, a),
            bindex: matching_positions(a, b),
        };
        discarded
            .is_worthwhile(a.len(), b.len())
            .then_some(discarded)
    }
}

/// One diagonal run of the search path, `size` equal elements from `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    pub predecessor: Option<usize>,
    pub x: usize,
    pub y: usize,
    pub size: usize,
}

/// Arena of snakes; every path is a chain of indices into it.
#[derive(Debug, Default)]
pub struct SnakeArena {
    snakes: Vec<Snake>,
}

impl SnakeArena {
    fn push(&mut self, snake: Snake) -> usize {
        self.snakes.push(snake);
        self.snakes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.snakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snakes.is_empty()
    }

    /// Snakes of the chain ending at `last`, last snake first.
    pub fn chain(&self, last: Option<usize>) -> impl Iterator<Item = &Snake> {
        std::iter::successors(last.map(|idx| &self.snakes[idx]), |snake| {
            snake.predecessor.map(|idx| &self.snakes[idx])
        })
    }
}

/// Furthest point reached on each diagonal, `(y, last snake)`.
struct Frontier {
    points: Vec<(isize, Option<usize>)>,
}

impl Frontier {
    const UNREACHED: (isize, Option<usize>) = (-1, None);

    fn new(size: usize) -> Self {
        Self {
            points: vec![Self::UNREACHED; size],
        }
    }

    fn get(&self, km: isize) -> (isize, Option<usize>) {
        usize::try_from(km)
            .ok()
            .and_then(|km| self.points.get(km).copied())
            .unwrap_or(Self::UNREACHED)
    }

    fn set(&mut self, km: isize, point: (isize, Option<usize>)) {
        if let Ok(km) = usize::try_from(km)
            && let Some(slot) = self.points.get_mut(km)
        {
            *slot = point;
        }
    }
}

/// Runs the O(NP) search and returns the snake arena with the index of the
/// last snake on the shortest path (`None` when nothing matches).
pub fn shortest_edit_path<U: PartialEq>(a: &[U], b: &[U]) -> (SnakeArena, Option<usize>) {
    let mut arena = SnakeArena::default();
    let (m, n) = (a.len(), b.len());
    if m == 0 || n == 0 {
        return (arena, None);
    }

    let (mi, ni) = (m as isize, n as isize);
    let middle = mi + 1;
    let delta = ni - mi + middle;
    let (dmin, dmax) = (middle.min(delta), middle.max(delta));
    let mut fp = Frontier::new(m + n + 2);

    // Follows the snake starting at (x, y) if there is one, recording it.
    let follow = |arena: &mut SnakeArena, x: isize, y: isize, node: Option<usize>| {
        if x < 0 || y < 0 || x >= mi || y >= ni {
            return (y, node);
        }
        let (x0, y0) = (x as usize, y as usize);
        let size = a[x0..]
            .iter()
            .zip(&b[y0..])
            .take_while(|(l, r)| l == r)
            .count();
        if size == 0 {
            return (y, node);
        }
        let idx = arena.push(Snake {
            predecessor: node,
            x: x0,
            y: y0,
            size,
        });
        (y + size as isize, Some(idx))
    };

    let mut p: isize = 0;
    loop {
        // diagonals below delta, approached along vertical edges
        let (mut yv, mut node) = Frontier::UNREACHED;
        for km in (dmin - p)..delta {
            let (y, prev) = fp.get(km + 1);
            if yv < y {
                (yv, node) = (y, prev);
            } else {
                yv += 1;
            }
            (yv, node) = follow(&mut arena, yv - km + middle, yv, node);
            fp.set(km, (yv, node));
        }

        // diagonals above delta, approached along horizontal edges
        let (mut yh, mut node) = Frontier::UNREACHED;
        for km in ((delta + 1)..=(dmax + p)).rev() {
            let (y, prev) = fp.get(km - 1);
            if yh <= y {
                (yh, node) = (y + 1, prev);
            }
            (yh, node) = follow(&mut arena, yh - km + middle, yh, node);
            fp.set(km, (yh, node));
        }

        // the sink diagonal itself
        let (y, node) = if yv < yh {
            fp.get(delta + 1)
        } else {
            let (y, node) = fp.get(delta - 1);
            (y + 1, node)
        };
        let (y, node) = follow(&mut arena, y - delta + middle, y, node);
        fp.set(delta, (y, node));

        if y >= ni {
            trace!(p, snakes = arena.len(), "reached sink");
            return (arena, node);
        }
        p += 1;
    }
}

/// Merges blocks that touch in either sequence when the elements leading up
/// to the later block equal the earlier block's length of elements.
pub fn merge_touching_blocks<T: PartialEq>(blocks: &[Match], a: &[T], b: &[T]) -> Vec<Match> {
    let Some((&sentinel, rest)) = blocks.split_last() else {
        return Vec::new();
    };

    let mut merged = vec![sentinel];
    let mut remaining = rest.iter().rev().peekable();
    while let Some(&block) = remaining.next() {
        let mut current = block;
        while let Some(&&prev) = remaining.peek() {
            let touches = prev.b_end() == current.b || prev.a_end() == current.a;
            let fits = current.a >= prev.size && current.b >= prev.size;
            if !(touches
                && fits
                && a[current.a - prev.size..current.a] == b[current.b - prev.size..current.b])
            {
                break;
            }
            current = Match::new(
                current.a - prev.size,
                current.b - prev.size,
                current.size + prev.size,
            );
            remaining.next();
        }
        merged.push(current);
    }

    merged.reverse();
    merged
}

/// Myers matcher parameterized by its discard step.
///
/// Use the [`MyersSequenceMatcher`] and
/// [`InlineMyersSequenceMatcher`](crate::artifacts::matching::inline::InlineMyersSequenceMatcher)
/// aliases rather than naming the strategy directly.
pub struct MyersMatcher<'s, T, D> {
    a: &'s [T],
    b: &'s [T],
    strategy: D,
    matching_blocks: OnceCell<Vec<Match>>,
    opcodes: OnceCell<Vec<Opcode>>,
}

pub type MyersSequenceMatcher<'s, T> = MyersMatcher<'s, T, LineDiscard>;

impl<'s, T, D> MyersMatcher<'s, T, D>
where
    T: Eq + Hash,
    D: DiscardStrategy<T> + Default,
{
    pub fn new(a: &'s [T], b: &'s [T]) -> Self {
        Self::with_strategy(a, b, D::default())
    }
}

impl<'s, T, D> MyersMatcher<'s, T, D>
where
    T: Eq + Hash,
    D: DiscardStrategy<T>,
{
    pub fn with_strategy(a: &'s [T], b: &'s [T], strategy: D) -> Self {
        Self {
            a,
            b,
            strategy,
            matching_blocks: OnceCell::new(),
            opcodes: OnceCell::new(),
        }
    }

    pub fn set_seqs(&mut self, a: &'s [T], b: &'s [T]) {
        self.set_seq1(a);
        self.set_seq2(b);
    }

    /// Replaces A, keeping B, and drops the cached results.
    pub fn set_seq1(&mut self, a: &'s [T]) {
        self.a = a;
        self.reset();
    }

    /// Replaces B, keeping A, and drops the cached results.
    pub fn set_seq2(&mut self, b: &'s [T]) {
        self.b = b;
        self.reset();
    }

    fn reset(&mut self) {
        self.matching_blocks = OnceCell::new();
        self.opcodes = OnceCell::new();
    }

    fn compute_matching_blocks(&self) -> Vec<Match> {
        let (a, b) = (self.a, self.b);
        let prefix = common_prefix(a, b);
        let (mut a_rest, mut b_rest) = (&a[prefix..], &b[prefix..]);
        let mut suffix = 0;
        if !a_rest.is_empty() && !b_rest.is_empty() {
            suffix = common_suffix(a_rest, b_rest);
            a_rest = &a_rest[..a_rest.len() - suffix];
            b_rest = &b_rest[..b_rest.len() - suffix];
        }

        let discarded = self.strategy.discard(a_rest, b_rest);
        debug!(
            a_len = a.len(),
            b_len = b.len(),
            prefix,
            suffix,
            discarded = discarded.is_some(),
            "myers preprocess"
        );

        let mut blocks = Vec::new();
        if prefix > 0 {
            blocks.push(Match::new(0, 0, prefix));
        }
        match &discarded {
            Some(kept) => {
                let a_kept: Vec<&T> = kept.aindex.iter().map(|&i| &a_rest[i]).collect();
                let b_kept: Vec<&T> = kept.bindex.iter().map(|&j| &b_rest[j]).collect();
                let (arena, last) = shortest_edit_path(&a_kept, &b_kept);
                blocks.extend(split_discarded_snakes(&arena, last, kept, prefix));
            }
            None => {
                let (arena, last) = shortest_edit_path(a_rest, b_rest);
                let mut snakes: Vec<Match> = arena
                    .chain(last)
                    .map(|s| Match::new(s.x + prefix, s.y + prefix, s.size))
                    .collect();
                snakes.reverse();
                blocks.extend(snakes);
            }
        }
        if suffix > 0 {
            blocks.push(Match::new(a.len() - suffix, b.len() - suffix, suffix));
        }
        blocks.push(Match::new(a.len(), b.len(), 0));

        merge_touching_blocks(&blocks, a, b)
    }
}

/// Maps snakes found on compacted sequences back to original positions,
/// splitting each one wherever discarded elements sat between its elements.
fn split_discarded_snakes(
    arena: &SnakeArena,
    last: Option<usize>,
    kept: &Discarded,
    offset: usize,
) -> Vec<Match> {
    let mut blocks = Vec::new();
    for snake in arena.chain(last) {
        // walk the snake backwards so blocks come out in reverse order
        let original = |k: usize| {
            (
                kept.aindex[snake.x + k] + offset,
                kept.bindex[snake.y + k] + offset,
            )
        };
        let (mut x_prev, mut y_prev) = original(snake.size - 1);
        let mut run = 1;
        for k in (0..snake.size - 1).rev() {
            let (x_next, y_next) = original(k);
            if x_prev - x_next != 1 || y_prev - y_next != 1 {
                blocks.push(Match::new(x_prev, y_prev, run));
                run = 0;
            }
            (x_prev, y_prev) = (x_next, y_next);
            run += 1;
        }
        blocks.push(Match::new(x_prev, y_prev, run));
    }
    blocks.reverse();
    blocks
}

pub fn common_prefix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(l, r)| l == r).count()
}

pub fn common_suffix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(l, r)| l == r)
        .count()
}

impl<T, D> SequenceMatcher<T> for MyersMatcher<'_, T, D>
where
    T: Eq + Hash,
    D: DiscardStrategy<T>,
{
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
}
