//! Human-readable line deltas
//!
//! Every output line starts with a two-character code:
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | `- ` | line only in A                            |
//! | `+ ` | line only in B                            |
//! | `  ` | line in both                              |
//! | `? ` | intraline markers for the line above it   |
//!
//! ## Algorithm Overview
//!
//! Lines are aligned with the classic matcher. Inside each replaced block the
//! most similar (but not identical) pair of lines is used as a synchronization
//! point: the block is split around it, both halves are handled recursively,
//! and the pair itself is compared character by character to produce the `?`
//! marker lines. A pair must reach [`SYNC_CUTOFF`] similarity to be used; when
//! none does, an identical pair is used instead, and failing that the block is
//! dumped as plain deletions and insertions.
//!
//! Input lines are expected to keep their line terminators; marker lines are
//! always terminated with `\n`.

use crate::artifacts::matching::chunk::Tag;
use crate::artifacts::matching::classic::ClassicSequenceMatcher;
use crate::artifacts::matching::{MatcherConfig, SequenceMatcher};
use crate::errors::{DiffError, DiffResult};
use std::ops::Range;
use tracing::trace;

/// Minimum similarity for two differing lines to be marked up against each other.
pub const SYNC_CUTOFF: f64 = 0.75;

/// Line-level junk predicate over whole lines.
pub type LineJunk<'p> = &'p dyn Fn(&str) -> bool;
/// Character-level junk predicate used inside replaced line pairs.
pub type CharJunk<'p> = &'p dyn Fn(&char) -> bool;

#[derive(Clone, Copy, Default)]
pub struct Differ<'p> {
    linejunk: Option<LineJunk<'p>>,
    charjunk: Option<CharJunk<'p>>,
}

impl<'p> Differ<'p> {
    pub fn new(linejunk: Option<LineJunk<'p>>, charjunk: Option<CharJunk<'p>>) -> Self {
        Differ { linejunk, charjunk }
    }

    /// Produces the delta turning `a` into `b`.
    pub fn compare(&self, a: &[&str], b: &[&str]) -> Vec<String> {
        let is_junk;
        let config = match self.linejunk {
            Some(linejunk) => {
                is_junk = move |line: &&str| linejunk(line);
                MatcherConfig::with_junk(&is_junk)
            }
            None => MatcherConfig::default(),
        };
        let matcher = ClassicSequenceMatcher::with_config(a, b, config);

        let mut delta = Vec::with_capacity(a.len().max(b.len()));
        for op in matcher.opcodes() {
            let (a_range, b_range) = (op.a_start..op.a_end, op.b_start..op.b_end);
            match op.tag {
                Tag::Equal => dump(&mut delta, "  ", a, a_range),
                Tag::Delete => dump(&mut delta, "- ", a, a_range),
                Tag::Insert => dump(&mut delta, "+ ", b, b_range),
                Tag::Replace => self.fancy_replace(&mut delta, a, a_range, b, b_range),
            }
        }
        delta
    }

    fn char_config(&self) -> MatcherConfig<'p, char> {
        MatcherConfig {
            is_junk: self.charjunk,
            autojunk: true,
        }
    }

    fn fancy_replace(
        &self,
        delta: &mut Vec<String>,
        a: &[&str],
        a_range: Range<usize>,
        b: &[&str],
        b_range: Range<usize>,
    ) {
        let a_chars: Vec<Vec<char>> = a[a_range.clone()].iter().map(|l| l.chars().collect()).collect();
        let b_chars: Vec<Vec<char>> = b[b_range.clone()].iter().map(|l| l.chars().collect()).collect();
        let mut cruncher = ClassicSequenceMatcher::with_config(&[], &[], self.char_config());

        let mut best_ratio = SYNC_CUTOFF - 0.01;
        let mut best = None;
        let mut identical = None;
        for j in b_range.clone() {
            cruncher.set_seq2(&b_chars[j - b_range.start]);
            for i in a_range.clone() {
                if a[i] == b[j] {
                    identical.get_or_insert((i, j));
                    continue;
                }
                cruncher.set_seq1(&a_chars[i - a_range.start]);
                // cheap upper bounds first; ratio() is cached once computed
                if cruncher.real_quick_ratio() > best_ratio
                    && cruncher.quick_ratio() > best_ratio
                    && cruncher.ratio() > best_ratio
                {
                    best_ratio = cruncher.ratio();
                    best = Some((i, j));
                }
            }
        }

        let (best_i, best_j, is_identical) = match (best, identical) {
            (Some((i, j)), _) if best_ratio >= SYNC_CUTOFF => (i, j, false),
            (_, Some((i, j))) => (i, j, true),
            _ => {
                plain_replace(delta, a, a_range, b, b_range);
                return;
            }
        };
        trace!(best_i, best_j, best_ratio, is_identical, "synchronizing replace");

        self.fancy_helper(delta, a, a_range.start..best_i, b, b_range.start..best_j);

        if is_identical {
            delta.push(format!("  {}", a[best_i]));
        } else {
            cruncher.set_seqs(
                &a_chars[best_i - a_range.start],
                &b_chars[best_j - b_range.start],
            );
            let (mut atags, mut btags) = (String::new(), String::new());
            for op in cruncher.opcodes() {
                let (la, lb) = (op.a_len(), op.b_len());
                match op.tag {
                    Tag::Replace => {
                        atags.extend(std::iter::repeat_n('^', la));
                        btags.extend(std::iter::repeat_n('^', lb));
                    }
                    Tag::Delete => atags.extend(std::iter::repeat_n('-', la)),
                    Tag::Insert => btags.extend(std::iter::repeat_n('+', lb)),
                    Tag::Equal => {
                        atags.extend(std::iter::repeat_n(' ', la));
                        btags.extend(std::iter::repeat_n(' ', lb));
                    }
                }
            }
            qformat(delta, a[best_i], b[best_j], &atags, &btags);
        }

        self.fancy_helper(delta, a, best_i + 1..a_range.end, b, best_j + 1..b_range.end);
    }

    fn fancy_helper(
        &self,
        delta: &mut Vec<String>,
        a: &[&str],
        a_range: Range<usize>,
        b: &[&str],
        b_range: Range<usize>,
    ) {
        match (a_range.is_empty(), b_range.is_empty()) {
            (false, false) => self.fancy_replace(delta, a, a_range, b, b_range),
            (false, true) => dump(delta, "- ", a, a_range),
            (true, false) => dump(delta, "+ ", b, b_range),
            (true, true) => {}
        }
    }
}

fn dump(delta: &mut Vec<String>, prefix: &str, lines: &[&str], range: Range<usize>) {
    delta.extend(lines[range].iter().map(|line| format!("{prefix}{line}")));
}

/// Dumps the shorter block first, which tends to read better.
fn plain_replace(
    delta: &mut Vec<String>,
    a: &[&str],
    a_range: Range<usize>,
    b: &[&str],
    b_range: Range<usize>,
) {
    if b_range.len() < a_range.len() {
        dump(delta, "+ ", b, b_range);
        dump(delta, "- ", a, a_range);
    } else {
        dump(delta, "- ", a, a_range);
        dump(delta, "+ ", b, b_range);
    }
}

/// Emits the `-`/`?`/`+`/`?` quad for a synchronized pair.
///
/// Leading tabs shared by both lines are kept as tabs in the marker lines so
/// the markers stay aligned; trailing blanks are dropped and empty marker
/// lines are omitted.
fn qformat(delta: &mut Vec<String>, aline: &str, bline: &str, atags: &str, btags: &str) {
    fn leading(s: &str, ch: char) -> usize {
        s.chars().take_while(|&c| c == ch).count()
    }

    let mut common = leading(aline, '\t').min(leading(bline, '\t'));
    common = common.min(leading(&atags[..common.min(atags.len())], ' '));
    common = common.min(leading(&btags[..common.min(btags.len())], ' '));
    let indent = "\t".repeat(common);
    let atags = atags[common.min(atags.len())..].trim_end();
    let btags = btags[common.min(btags.len())..].trim_end();

    delta.push(format!("- {aline}"));
    if !atags.is_empty() {
        delta.push(format!("? {indent}{atags}\n"));
    }
    delta.push(format!("+ {bline}"));
    if !btags.is_empty() {
        delta.push(format!("? {indent}{btags}\n"));
    }
}

/// Compares two line sequences the way `ndiff` does.
///
/// Pass [`is_character_junk`](crate::artifacts::matching::junk::is_character_junk)
/// as `charjunk` for the usual behaviour of ignoring blanks inside lines.
pub fn ndiff(
    a: &[&str],
    b: &[&str],
    linejunk: Option<LineJunk<'_>>,
    charjunk: Option<CharJunk<'_>>,
) -> Vec<String> {
    Differ::new(linejunk, charjunk).compare(a, b)
}

/// Recovers one of the two sequences a delta was generated from.
///
/// `which` selects A (`1`) or B (`2`); anything else is an
/// [`DiffError::InvalidArgument`].
pub fn restore<S: AsRef<str>>(delta: &[S], which: usize) -> DiffResult<Vec<&str>> {
    let tag = match which {
        1 => "- ",
        2 => "+ ",
        _ => {
            return Err(DiffError::invalid_argument(format!(
                "unknown delta side {which}, expected 1 or 2"
            )));
        }
    };

    Ok(delta
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|line| {
            line.strip_prefix("  ")
                .or_else(|| line.strip_prefix(tag))
        })
        .collect())
}
