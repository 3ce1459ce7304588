use crate::common::command::{run_seqdiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_for_a_missing_file(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a\n".to_string()));

    run_seqdiff_command(dir, &["ndiff", "a.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));

    Ok(())
}
