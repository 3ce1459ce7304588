use crate::common::command::{run_seqdiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn color_delta_lines_when_forced(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "keep\ndrop\n".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "keep\nadd\n".to_string()));

    run_seqdiff_command(dir, &["--color", "always", "ndiff", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[31m- drop"))
        .stdout(predicate::str::contains("\u{1b}[32m+ add"))
        .stdout(predicate::str::contains("  keep\n"));

    Ok(())
}
