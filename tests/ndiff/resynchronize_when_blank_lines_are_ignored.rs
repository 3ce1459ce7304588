use crate::common::command::{seqdiff_stdout, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn resynchronize_when_blank_lines_are_ignored(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "begin\nbegin\n\n".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "begin\n\nbegin\n".to_string()));

    let plain = seqdiff_stdout(dir, &["ndiff", "a.txt", "b.txt"])?;
    let ignoring_blanks =
        seqdiff_stdout(dir, &["ndiff", "a.txt", "b.txt", "--ignore-blank-lines"])?;

    // a blank line can no longer anchor the match
    pretty_assertions::assert_eq!(plain, "- begin\n  begin\n  \n+ begin\n");
    pretty_assertions::assert_eq!(ignoring_blanks, "  begin\n+ \n  begin\n- \n");

    Ok(())
}
