use crate::areas::comparator::Comparator;
use crate::areas::workspace::{split_lines, strip_terminator};
use crate::artifacts::diff::differ::{CharJunk, Differ, LineJunk};
use crate::artifacts::matching::junk::{is_character_junk, is_line_junk};
use anyhow::Context;
use colored::Colorize;
use derive_new::new;
use regex::Regex;

#[derive(Debug, Clone, Default, new)]
pub struct NdiffOptions {
    pub ignore_blank_lines: bool,
    pub ignore_matching_lines: Option<String>,
    pub charjunk: bool,
}

impl Comparator {
    pub fn ndiff(&self, a: &str, b: &str, options: &NdiffOptions) -> anyhow::Result<()> {
        let a = self.load(a, false)?;
        let b = self.load(b, false)?;

        let pattern = options
            .ignore_matching_lines
            .as_deref()
            .map(Regex::new)
            .transpose()
            .context("Invalid --ignore-matching-lines pattern")?;
        let ignore_blank_lines = options.ignore_blank_lines;
        let is_ignored = |line: &str| {
            (ignore_blank_lines && is_line_junk(line))
                || pattern
                    .as_ref()
                    .is_some_and(|re| re.is_match(strip_terminator(line)))
        };

        let linejunk =
            (ignore_blank_lines || pattern.is_some()).then_some(&is_ignored as LineJunk);
        let charjunk = options
            .charjunk
            .then_some(&is_character_junk as CharJunk);

        let delta = Differ::new(linejunk, charjunk)
            .compare(&split_lines(&a.content), &split_lines(&b.content));
        for line in &delta {
            self.print_delta_line(line)?;
        }

        Ok(())
    }

    fn print_delta_line(&self, line: &str) -> anyhow::Result<()> {
        let text = strip_terminator(line);
        match text.get(..2) {
            Some("- ") => writeln!(self.writer(), "{}", text.red())?,
            Some("+ ") => writeln!(self.writer(), "{}", text.green())?,
            Some("? ") => writeln!(self.writer(), "{}", text.cyan())?,
            _ => writeln!(self.writer(), "{text}")?,
        }
        Ok(())
    }
}
