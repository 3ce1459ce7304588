//! Unified and context diff text
//!
//! Both formats are built from [`SequenceMatcher::grouped_opcodes`]: each
//! group becomes one hunk. Header lines end with
//! [`FormatOptions::line_term`]; body lines are copied from the inputs as they
//! are, so inputs are expected to keep their own line terminators.
//!
//! Ranges are 1-based. An empty range is reported at the line before it.

use crate::artifacts::matching::chunk::{Opcode, Tag};
use crate::artifacts::matching::classic::ClassicSequenceMatcher;
use crate::artifacts::matching::{DEFAULT_CONTEXT, SequenceMatcher};
use derive_new::new;

/// Labels, dates and layout of a formatted diff.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FormatOptions {
    pub from_file: String,
    pub to_file: String,
    #[new(default)]
    pub from_date: String,
    #[new(default)]
    pub to_date: String,
    #[new(value = "DEFAULT_CONTEXT")]
    pub context: usize,
    #[new(value = "\"\\n\".to_string()")]
    pub line_term: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions::new(String::new(), String::new())
    }
}

impl FormatOptions {
    pub fn with_dates(mut self, from_date: impl Into<String>, to_date: impl Into<String>) -> Self {
        self.from_date = from_date.into();
        self.to_date = to_date.into();
        self
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn with_line_term(mut self, line_term: impl Into<String>) -> Self {
        self.line_term = line_term.into();
        self
    }

    fn header(&self, marker: &str, file: &str, date: &str) -> String {
        if date.is_empty() {
            format!("{marker} {file}{}", self.line_term)
        } else {
            format!("{marker} {file}\t{date}{}", self.line_term)
        }
    }
}

/// `start,length` with the length omitted when it is 1.
pub fn unified_range(start: usize, stop: usize) -> String {
    let length = stop - start;
    match length {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{length}", start + 1),
    }
}

/// `first,last` with the last line omitted when the range holds at most one line.
pub fn context_range(start: usize, stop: usize) -> String {
    let length = stop - start;
    match length {
        0 => format!("{start}"),
        1 => format!("{}", start + 1),
        _ => format!("{},{}", start + 1, stop),
    }
}

fn group_span(group: &[Opcode]) -> Option<(Opcode, Opcode)> {
    Some((*group.first()?, *group.last()?))
}

/// Unified diff of two line sequences, aligned with the classic matcher.
pub fn unified_diff(a: &[&str], b: &[&str], options: &FormatOptions) -> Vec<String> {
    unified_diff_with(&ClassicSequenceMatcher::new(a, b), options)
}

/// Unified diff from any line matcher; empty when the sequences are equal.
pub fn unified_diff_with<'l, M>(matcher: &M, options: &FormatOptions) -> Vec<String>
where
    M: SequenceMatcher<&'l str> + ?Sized,
{
    let (a, b) = matcher.sequences();
    let groups = matcher.grouped_opcodes(options.context);
    let mut lines = Vec::new();

    for group in &groups {
        let Some((first, last)) = group_span(group) else {
            continue;
        };
        if lines.is_empty() {
            lines.push(options.header("---", &options.from_file, &options.from_date));
            lines.push(options.header("+++", &options.to_file, &options.to_date));
        }
        lines.push(format!(
            "@@ -{} +{} @@{}",
            unified_range(first.a_start, last.a_end),
            unified_range(first.b_start, last.b_end),
            options.line_term
        ));

        for op in group {
            if op.tag == Tag::Equal {
                lines.extend(a[op.a_start..op.a_end].iter().map(|line| format!(" {line}")));
                continue;
            }
            if op.tag.touches_a() {
                lines.extend(a[op.a_start..op.a_end].iter().map(|line| format!("-{line}")));
            }
            if op.tag.touches_b() {
                lines.extend(b[op.b_start..op.b_end].iter().map(|line| format!("+{line}")));
            }
        }
    }

    lines
}

/// Context diff of two line sequences, aligned with the classic matcher.
pub fn context_diff(a: &[&str], b: &[&str], options: &FormatOptions) -> Vec<String> {
    context_diff_with(&ClassicSequenceMatcher::new(a, b), options)
}

fn context_prefix(tag: Tag) -> &'static str {
    match tag {
        Tag::Equal => "  ",
        Tag::Replace => "! ",
        Tag::Delete => "- ",
        Tag::Insert => "+ ",
    }
}

/// Context diff from any line matcher; empty when the sequences are equal.
///
/// A side's lines are only listed when the hunk changes something on that side.
pub fn context_diff_with<'l, M>(matcher: &M, options: &FormatOptions) -> Vec<String>
where
    M: SequenceMatcher<&'l str> + ?Sized,
{
    let (a, b) = matcher.sequences();
    let groups = matcher.grouped_opcodes(options.context);
    let mut lines = Vec::new();

    for group in &groups {
        let Some((first, last)) = group_span(group) else {
            continue;
        };
        if lines.is_empty() {
            lines.push(options.header("***", &options.from_file, &options.from_date));
            lines.push(options.header("---", &options.to_file, &options.to_date));
        }
        lines.push(format!("***************{}", options.line_term));

        lines.push(format!(
            "*** {} ****{}",
            context_range(first.a_start, last.a_end),
            options.line_term
        ));
        if group.iter().any(|op| matches!(op.tag, Tag::Replace | Tag::Delete)) {
            for op in group.iter().filter(|op| op.tag != Tag::Insert) {
                let prefix = context_prefix(op.tag);
                lines.extend(a[op.a_start..op.a_end].iter().map(|line| format!("{prefix}{line}")));
            }
        }

        lines.push(format!(
            "--- {} ----{}",
            context_range(first.b_start, last.b_end),
            options.line_term
        ));
        if group.iter().any(|op| matches!(op.tag, Tag::Replace | Tag::Insert)) {
            for op in group.iter().filter(|op| op.tag != Tag::Delete) {
                let prefix = context_prefix(op.tag);
                lines.extend(b[op.b_start..op.b_end].iter().map(|line| format!("{prefix}{line}")));
            }
        }
    }

    lines
}
