//! Junk and popular element classification for sequence B
//!
//! The classic matcher only anchors its longest-match search on elements that
//! are neither junk (rejected by the caller's predicate) nor popular (present
//! in more than `1 + len(b) / 100` positions of a sequence of 200+ elements).
//! Restricting the anchors this way keeps the search near-linear on inputs
//! full of boilerplate such as blank lines or closing braces.
//!
//! The classification depends on B only and is rebuilt whenever B changes.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::LazyLock;
use tracing::debug;

/// Sequences shorter than this never have popular elements.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Caller-supplied junk predicate.
pub type JunkPredicate<'p, T> = &'p dyn Fn(&T) -> bool;

static BLANK_OR_HASH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:#\s*)?$").expect("static pattern compiles"));

/// A line is junk when it is blank or contains a single `#`, ignoring whitespace.
pub fn is_line_junk(line: &str) -> bool {
    BLANK_OR_HASH_LINE.is_match(line)
}

/// Spaces and tabs are junk when comparing characters within a line.
pub fn is_character_junk(ch: &char) -> bool {
    matches!(ch, ' ' | '\t')
}

#[derive(Debug, Clone)]
pub struct JunkClassifier<'s, T: Eq + Hash> {
    b2j: HashMap<&'s T, Vec<usize>>,
    bjunk: HashSet<&'s T>,
    bpopular: HashSet<&'s T>,
}

impl<'s, T: Eq + Hash> JunkClassifier<'s, T> {
    pub fn new(b: &'s [T], is_junk: Option<JunkPredicate<'_, T>>, autojunk: bool) -> Self {
        let mut b2j: HashMap<&'s T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let bjunk: HashSet<&'s T> = match is_junk {
            Some(is_junk) => b2j.keys().copied().filter(|elt| is_junk(elt)).collect(),
            None => HashSet::new(),
        };
        for elt in &bjunk {
            b2j.remove(elt);
        }

        let mut bpopular = HashSet::new();
        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let threshold = b.len() / 100 + 1;
            bpopular = b2j
                .iter()
                .filter(|(_, indices)| indices.len() > threshold)
                .map(|(elt, _)| *elt)
                .collect();
            for elt in &bpopular {
                b2j.remove(elt);
            }
        }

        debug!(
            b_len = b.len(),
            anchors = b2j.len(),
            junk = bjunk.len(),
            popular = bpopular.len(),
            "classified sequence b"
        );

        Self {
            b2j,
            bjunk,
            bpopular,
        }
    }

    /// Ascending positions of `elt` in B, empty for junk, popular or absent elements.
    pub fn positions(&self, elt: &T) -> &[usize] {
        self.b2j.get(elt).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn b2j(&self) -> &HashMap<&'s T, Vec<usize>> {
        &self.b2j
    }

    pub fn bjunk(&self) -> &HashSet<&'s T> {
        &self.bjunk
    }

    pub fn bpopular(&self) -> &HashSet<&'s T> {
        &self.bpopular
    }
}
