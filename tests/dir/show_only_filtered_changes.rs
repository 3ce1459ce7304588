use super::report_added_deleted_and_modified_files::two_trees;
use crate::common::command::seqdiff_stdout;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("AD", "D\tgone.txt\nA\tsub/new.txt\n")]
#[case("M", "M075\tchanged.txt\n")]
#[case("A", "A\tsub/new.txt\n")]
fn show_only_filtered_changes(
    two_trees: TempDir,
    #[case] filter: &str,
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = seqdiff_stdout(
        two_trees.path(),
        &["dir", "old", "new", "--diff-filter", filter],
    )?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
