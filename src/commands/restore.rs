use crate::areas::comparator::Comparator;
use crate::areas::workspace::{split_lines, strip_terminator};
use crate::artifacts::diff::differ::restore;

impl Comparator {
    /// Prints side `which` (1 or 2) of the delta stored in `delta_file`.
    pub fn restore(&self, delta_file: &str, which: usize) -> anyhow::Result<()> {
        let delta = self.load(delta_file, false)?;

        for line in restore(&split_lines(&delta.content), which)? {
            writeln!(self.writer(), "{}", strip_terminator(line))?;
        }

        Ok(())
    }
}
