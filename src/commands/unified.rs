use crate::Algorithm;
use crate::areas::comparator::{Comparator, LoadedFile};
use crate::areas::workspace::{split_lines, strip_terminator};
use crate::artifacts::diff::format::{FormatOptions, context_diff_with, unified_diff_with};
use crate::artifacts::matching::{DEFAULT_CONTEXT, MatcherConfig, build_matcher};
use colored::Colorize;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStyle {
    Unified,
    Context,
}

#[derive(Debug, Clone, Copy, new)]
pub struct DiffCommandOptions {
    pub style: DiffStyle,
    pub algorithm: Algorithm,
    #[new(value = "DEFAULT_CONTEXT")]
    pub context: usize,
    #[new(value = "true")]
    pub with_dates: bool,
}

impl DiffCommandOptions {
    pub fn context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn with_dates(mut self, with_dates: bool) -> Self {
        self.with_dates = with_dates;
        self
    }
}

impl Comparator {
    pub fn unified(&self, a: &str, b: &str, options: DiffCommandOptions) -> anyhow::Result<()> {
        let a = self.load(a, options.with_dates)?;
        let b = self.load(b, options.with_dates)?;
        let (a_lines, b_lines) = (split_lines(&a.content), split_lines(&b.content));

        let matcher = build_matcher(
            options.algorithm,
            &a_lines,
            &b_lines,
            MatcherConfig::default(),
        )?;
        let format_options = Self::format_options(&a, &b, options.context);
        let lines = match options.style {
            DiffStyle::Unified => unified_diff_with(matcher.as_ref(), &format_options),
            DiffStyle::Context => context_diff_with(matcher.as_ref(), &format_options),
        };

        for (index, line) in lines.iter().enumerate() {
            self.print_diff_line(options.style, index, line)?;
        }

        Ok(())
    }

    fn format_options(a: &LoadedFile, b: &LoadedFile, context: usize) -> FormatOptions {
        FormatOptions::new(a.label.clone(), b.label.clone())
            .with_dates(a.modified.clone(), b.modified.clone())
            .with_context(context)
    }

    fn print_diff_line(&self, style: DiffStyle, index: usize, line: &str) -> anyhow::Result<()> {
        let text = strip_terminator(line);
        // the first two lines are always the file headers
        let painted = if index < 2 {
            text.bold()
        } else {
            match style {
                DiffStyle::Unified => match text.chars().next() {
                    Some('@') => text.cyan(),
                    Some('-') => text.red(),
                    Some('+') => text.green(),
                    _ => text.normal(),
                },
                DiffStyle::Context => match text.get(..2) {
                    Some("! ") => text.yellow(),
                    Some("- ") => text.red(),
                    Some("+ ") => text.green(),
                    Some("  ") => text.normal(),
                    _ => text.cyan(),
                },
            }
        };

        writeln!(self.writer(), "{painted}")?;
        Ok(())
    }
}
