use super::report_added_deleted_and_modified_files::two_trees;
use crate::common::command::seqdiff_stdout;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn compare_trees_holding_binary_files(
    two_trees: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = two_trees.path();
    std::fs::write(root.join("old").join("logo.bin"), b"\xff\xfe\x00")?;
    std::fs::write(root.join("new").join("logo.bin"), b"\xff\xfe\x00")?;
    std::fs::write(root.join("old").join("icon.bin"), b"\xff\x01")?;
    std::fs::write(root.join("new").join("icon.bin"), b"\xff\x02")?;

    // identical binaries are skipped, differing ones have no line similarity
    let expected_output = "M075\tchanged.txt\nD\tgone.txt\nM000\ticon.bin\nA\tsub/new.txt\n";

    let actual_output = seqdiff_stdout(root, &["dir", "old", "new"])?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
