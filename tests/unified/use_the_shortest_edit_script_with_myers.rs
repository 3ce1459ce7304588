use crate::common::command::{ambiguous_dir, seqdiff_stdout};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn use_the_shortest_edit_script_with_myers(
    ambiguous_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = ambiguous_dir.path();

    let classic = seqdiff_stdout(dir, &["unified", "a.txt", "b.txt", "--no-dates"])?;
    let myers = seqdiff_stdout(
        dir,
        &["unified", "a.txt", "b.txt", "--no-dates", "--algorithm", "myers"],
    )?;

    pretty_assertions::assert_eq!(classic, "--- a.txt\n+++ b.txt\n@@ -1,3 +1,3 @@\n+x\n+z\n y\n-x\n-y\n");
    pretty_assertions::assert_eq!(myers, "--- a.txt\n+++ b.txt\n@@ -1,3 +1,3 @@\n-y\n x\n+z\n y\n");

    Ok(())
}
