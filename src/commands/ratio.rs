use crate::Algorithm;
use crate::areas::comparator::Comparator;
use crate::areas::workspace::split_lines;
use crate::artifacts::matching::{MatcherConfig, build_matcher};
use colored::Colorize;

impl Comparator {
    /// Prints the similarity of two files and its two cheaper upper bounds.
    pub fn ratio(&self, a: &str, b: &str, algorithm: Algorithm) -> anyhow::Result<()> {
        let a = self.load(a, false)?;
        let b = self.load(b, false)?;
        let (a_lines, b_lines) = (split_lines(&a.content), split_lines(&b.content));

        let matcher = build_matcher(algorithm, &a_lines, &b_lines, MatcherConfig::default())?;
        let scores = [
            ("ratio", matcher.ratio()),
            ("quick_ratio", matcher.quick_ratio()),
            ("real_quick_ratio", matcher.real_quick_ratio()),
        ];

        for (name, score) in scores {
            writeln!(self.writer(), "{}: {score:.4}", name.bold())?;
        }

        Ok(())
    }
}
