use crate::common::command::{seqdiff_stdout, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn resynchronize_when_matching_lines_are_ignored(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "end\nend\n# note\n".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "end\n# note\nend\n".to_string()));

    let expected_output = "  end\n+ # note\n  end\n- # note\n";

    let actual_output = seqdiff_stdout(
        dir,
        &["ndiff", "a.txt", "b.txt", "--ignore-matching-lines", "^# "],
    )?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
