use crate::areas::comparator::Comparator;
use crate::artifacts::diff::close_matches::get_close_matches;

impl Comparator {
    pub fn close(
        &self,
        word: &str,
        candidates: &[String],
        n: usize,
        cutoff: f64,
    ) -> anyhow::Result<()> {
        for candidate in get_close_matches(word, candidates, n, cutoff)? {
            writeln!(self.writer(), "{candidate}")?;
        }

        Ok(())
    }
}
