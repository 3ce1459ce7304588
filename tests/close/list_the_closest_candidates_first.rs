use crate::common::command::{seqdiff_stdout, workspace_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["close", "appel", "ape", "apple", "peach", "puppy"], "apple\nape\n")]
#[case(&["close", "appel", "ape", "apple", "peach", "puppy", "-n", "1"], "apple\n")]
#[case(&["close", "wheel", "ape", "apple", "peach", "puppy"], "")]
fn list_the_closest_candidates_first(
    workspace_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = seqdiff_stdout(workspace_dir.path(), args)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
