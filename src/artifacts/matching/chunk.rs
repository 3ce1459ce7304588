//! Value types describing aligned spans of two sequences
//!
//! - [`Match`]: a run of pairwise-equal elements, `a[a..a+size] == b[b..b+size]`
//! - [`Opcode`]: one instruction of an edit script over `[a_start, a_end) x [b_start, b_end)`
//! - [`Tag`]: the closed set of opcode kinds

use crate::errors::DiffError;
use derive_new::new;
use std::fmt::Display;
use std::str::FromStr;

const TAG_NAMES: phf::Map<&'static str, Tag> = phf::phf_map! {
    "equal" => Tag::Equal,
    "replace" => Tag::Replace,
    "delete" => Tag::Delete,
    "insert" => Tag::Insert,
};

/// A maximal run of `size` equal elements starting at `a` in sequence A and
/// at `b` in sequence B.
///
/// Every matching-block list ends with the sentinel `(len(a), len(b), 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, new)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl Match {
    pub fn a_end(&self) -> usize {
        self.a + self.size
    }

    pub fn b_end(&self) -> usize {
        self.b + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn offset(&self, a_offset: usize, b_offset: usize) -> Self {
        Match::new(self.a + a_offset, self.b + b_offset, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Equal => "equal",
            Tag::Replace => "replace",
            Tag::Delete => "delete",
            Tag::Insert => "insert",
        }
    }

    /// Whether the chunk consumes lines of sequence A
    pub fn touches_a(&self) -> bool {
        matches!(self, Tag::Replace | Tag::Delete)
    }

    /// Whether the chunk introduces lines of sequence B
    pub fn touches_b(&self) -> bool {
        matches!(self, Tag::Replace | Tag::Insert)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TAG_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| DiffError::invalid_argument(format!("unknown opcode tag {s:?}")))
    }
}

/// One edit-script instruction. Consecutive opcodes are contiguous:
/// each chunk's `a_end`/`b_end` is the next chunk's `a_start`/`b_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Opcode {
    pub tag: Tag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    pub fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    pub fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>7} a[{}:{}] b[{}:{}]",
            self.tag, self.a_start, self.a_end, self.b_start, self.b_end
        )
    }
}
