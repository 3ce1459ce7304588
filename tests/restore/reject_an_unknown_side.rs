use crate::common::command::{run_seqdiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn reject_an_unknown_side(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("delta.txt"), "  same\n".to_string()));

    run_seqdiff_command(dir, &["restore", "delta.txt", "3"])
        .assert()
        .failure();

    Ok(())
}
