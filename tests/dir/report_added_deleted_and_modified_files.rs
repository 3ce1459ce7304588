use crate::common::command::{seqdiff_stdout, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::{fixture, rstest};

#[fixture]
pub fn two_trees(workspace_dir: TempDir) -> TempDir {
    let old = workspace_dir.path().join("old");
    let new = workspace_dir.path().join("new");

    write_file(FileSpec::new(old.join("keep.txt"), "same\n".to_string()));
    write_file(FileSpec::new(new.join("keep.txt"), "same\n".to_string()));
    write_file(FileSpec::new(old.join("gone.txt"), "bye\n".to_string()));
    write_file(FileSpec::new(
        old.join("changed.txt"),
        "a\nb\nc\nd\n".to_string(),
    ));
    write_file(FileSpec::new(
        new.join("changed.txt"),
        "a\nb\nc\ne\n".to_string(),
    ));
    write_file(FileSpec::new(new.join("sub").join("new.txt"), "hi\n".to_string()));

    workspace_dir
}

#[rstest]
fn report_added_deleted_and_modified_files(
    two_trees: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    // 3 of 4 lines shared on both sides
    let expected_output = "M075\tchanged.txt\nD\tgone.txt\nA\tsub/new.txt\n";

    let actual_output = seqdiff_stdout(two_trees.path(), &["dir", "old", "new"])?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
