use crate::common::command::{seqdiff_stdout, workspace_dir};
use crate::common::file::{create_directory, write_generated_files};
use assert_fs::TempDir;
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
fn list_every_file_of_a_new_tree_as_added(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path();
    create_directory(&dir.join("old"));
    let generated = write_generated_files(&dir.join("new"), 5);

    // generated names may repeat
    let expected_output = generated
        .iter()
        .filter_map(|spec| spec.path.file_name())
        .map(|name| format!("A\t{}\n", name.to_string_lossy()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<String>();

    let actual_output = seqdiff_stdout(dir, &["dir", "old", "new"])?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
