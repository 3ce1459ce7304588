use crate::common::command::{ambiguous_dir, seqdiff_stdout};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("classic", "ratio: 0.3333\nquick_ratio: 0.6667\nreal_quick_ratio: 1.0000\n")]
#[case("myers", "ratio: 0.6667\nquick_ratio: 0.6667\nreal_quick_ratio: 1.0000\n")]
fn print_similarity_and_its_upper_bounds(
    ambiguous_dir: TempDir,
    #[case] algorithm: &str,
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = seqdiff_stdout(
        ambiguous_dir.path(),
        &["ratio", "a.txt", "b.txt", "--algorithm", algorithm],
    )?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
