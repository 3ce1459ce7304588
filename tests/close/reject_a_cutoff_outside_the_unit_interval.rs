use crate::common::command::{run_seqdiff_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_a_cutoff_outside_the_unit_interval(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_seqdiff_command(
        workspace_dir.path(),
        &["close", "appel", "apple", "--cutoff", "1.5"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("cutoff"));

    Ok(())
}
