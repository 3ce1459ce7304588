use crate::common::command::{run_seqdiff_command, workspace_dir};
use crate::common::file::create_directory;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_an_unknown_diff_filter(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    create_directory(&dir.join("old"));
    create_directory(&dir.join("new"));

    run_seqdiff_command(dir, &["dir", "old", "new", "--diff-filter", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid diff filter"));

    Ok(())
}
