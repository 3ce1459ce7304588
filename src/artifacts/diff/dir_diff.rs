//! Directory tree comparison
//!
//! Files are paired by relative path. Unpaired files are added or deleted;
//! paired files with different contents are modified and get a line
//! similarity score. Scoring runs one matcher per file pair on the blocking
//! worker pool, so large trees are compared in parallel.
//!
//! Contents are compared as bytes. A modified pair that is not UTF-8 text on
//! both sides is reported with similarity 0.

use crate::Algorithm;
use crate::areas::workspace::{Workspace, split_lines};
use crate::artifacts::matching::{MatcherConfig, build_matcher};
use crate::errors::DiffResult;
use bitflags::bitflags;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tokio::task::JoinSet;
use tracing::debug;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const DELETED = 0b0010;
        const MODIFIED = 0b0100;
    }
}

impl DiffFilter {
    /// Parses a filter such as `"AM"`; `None` on any unknown letter.
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'D' => filter |= Self::DELETED,
                'M' => filter |= Self::MODIFIED,
                _ => return None,
            }
        }

        Some(filter)
    }
}

impl Default for DiffFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileChange {
    Added,
    Deleted,
    /// Contents differ; `similarity` is the line ratio in `[0, 1]`.
    Modified { similarity: f64 },
}

impl FileChange {
    pub fn matches_filter(&self, filter: DiffFilter) -> bool {
        match self {
            FileChange::Added => filter.contains(DiffFilter::ADDED),
            FileChange::Deleted => filter.contains(DiffFilter::DELETED),
            FileChange::Modified { .. } => filter.contains(DiffFilter::MODIFIED),
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            FileChange::Added => 'A',
            FileChange::Deleted => 'D',
            FileChange::Modified { .. } => 'M',
        }
    }

    /// `A`, `D`, or `M` followed by the similarity percentage (`M087`).
    pub fn status(&self) -> String {
        match self {
            FileChange::Modified { similarity } => {
                format!("M{:03}", (similarity * 100.0).floor() as u32)
            }
            other => other.status_char().to_string(),
        }
    }
}

pub type ChangeSet = BTreeMap<PathBuf, FileChange>;

#[derive(Debug, Clone, Copy, Default, new)]
pub struct DirDiffOptions {
    pub algorithm: Algorithm,
    pub filter: DiffFilter,
}

/// Similarity of two file contents: line ratio for text, 0 otherwise.
pub fn content_similarity(algorithm: Algorithm, old: &[u8], new: &[u8]) -> DiffResult<f64> {
    match (std::str::from_utf8(old), std::str::from_utf8(new)) {
        (Ok(old), Ok(new)) => line_similarity(algorithm, old, new),
        _ => Ok(0.0),
    }
}

/// Similarity of two texts compared line by line.
pub fn line_similarity(algorithm: Algorithm, old: &str, new: &str) -> DiffResult<f64> {
    let (a, b) = (split_lines(old), split_lines(new));
    let matcher = build_matcher(algorithm, &a, &b, MatcherConfig::default())?;
    Ok(matcher.ratio())
}

#[derive(Debug)]
pub struct DirDiff<'w> {
    old: &'w Workspace,
    new: &'w Workspace,
    options: DirDiffOptions,
}

impl<'w> DirDiff<'w> {
    pub fn new(old: &'w Workspace, new: &'w Workspace, options: DirDiffOptions) -> Self {
        DirDiff { old, new, options }
    }

    pub async fn compare(&self) -> anyhow::Result<ChangeSet> {
        let old_files: BTreeSet<PathBuf> = self.old.list_files()?.into_iter().collect();
        let new_files: BTreeSet<PathBuf> = self.new.list_files()?.into_iter().collect();
        let filter = self.options.filter;

        let mut change_set = ChangeSet::new();
        for path in old_files.difference(&new_files) {
            change_set.insert(path.clone(), FileChange::Deleted);
        }
        for path in new_files.difference(&old_files) {
            change_set.insert(path.clone(), FileChange::Added);
        }
        change_set.retain(|_, change| change.matches_filter(filter));

        if filter.contains(DiffFilter::MODIFIED) {
            let mut scoring = JoinSet::new();
            for path in old_files.intersection(&new_files) {
                let old_content = self.old.read_bytes(path)?;
                let new_content = self.new.read_bytes(path)?;
                if old_content == new_content {
                    continue;
                }

                let (path, algorithm) = (path.clone(), self.options.algorithm);
                scoring.spawn_blocking(move || {
                    content_similarity(algorithm, &old_content, &new_content)
                        .map(|similarity| (path, similarity))
                });
            }

            debug!(pairs = scoring.len(), "scoring modified files");
            while let Some(scored) = scoring.join_next().await {
                let (path, similarity) = scored??;
                change_set.insert(path, FileChange::Modified { similarity });
            }
        }

        Ok(change_set)
    }
}
