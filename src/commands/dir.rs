use crate::areas::comparator::Comparator;
use crate::artifacts::diff::dir_diff::{DirDiff, DirDiffOptions, FileChange};
use colored::Colorize;

impl Comparator {
    /// Prints one name-status line per changed file, in path order.
    pub async fn dir(&self, old: &str, new: &str, options: DirDiffOptions) -> anyhow::Result<()> {
        let old = self.workspace_at(old)?;
        let new = self.workspace_at(new)?;

        let changes = DirDiff::new(&old, &new, options).compare().await?;

        for (path, change) in &changes {
            let status = change.status();
            let status = match change {
                FileChange::Added => status.green(),
                FileChange::Deleted => status.red(),
                FileChange::Modified { .. } => status.yellow(),
            };
            writeln!(self.writer(), "{status}\t{}", path.display())?;
        }

        Ok(())
    }
}
