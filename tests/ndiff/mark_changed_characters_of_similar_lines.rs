use crate::common::command::{seqdiff_stdout, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn mark_changed_characters_of_similar_lines(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one\ntwo\nthree\n".to_string()));
    write_file(FileSpec::new(dir.join("2.txt"), "ore\ntree\nemu\n".to_string()));

    let expected_output = "- one\n?  ^\n+ ore\n?  ^\n- two\n- three\n?  -\n+ tree\n+ emu\n";

    let actual_output = seqdiff_stdout(dir, &["ndiff", "1.txt", "2.txt"])?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
