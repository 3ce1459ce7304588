use crate::common::command::{seqdiff_stdout, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn recover_both_inputs_from_a_saved_delta(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one\ntwo\nthree\n".to_string()));
    write_file(FileSpec::new(dir.join("2.txt"), "ore\ntree\nemu\n".to_string()));

    let delta = seqdiff_stdout(dir, &["ndiff", "1.txt", "2.txt"])?;
    write_file(FileSpec::new(dir.join("delta.txt"), delta));

    pretty_assertions::assert_eq!(
        seqdiff_stdout(dir, &["restore", "delta.txt", "1"])?,
        "one\ntwo\nthree\n"
    );
    pretty_assertions::assert_eq!(
        seqdiff_stdout(dir, &["restore", "delta.txt", "2"])?,
        "ore\ntree\nemu\n"
    );

    Ok(())
}
