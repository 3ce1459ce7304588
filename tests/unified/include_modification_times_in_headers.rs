use crate::common::command::{seqdiff_stdout, sources_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn include_modification_times_in_headers(
    sources_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = seqdiff_stdout(sources_dir.path(), &["unified", "a.rs", "b.rs"])?;
    let mut headers = actual_output.lines().take(2);

    let old_header = regex::Regex::new(
        r"^--- a\.rs\t\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{9} [+-]\d{4}$",
    )?;
    let new_header = regex::Regex::new(
        r"^\+\+\+ b\.rs\t\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{9} [+-]\d{4}$",
    )?;

    assert!(old_header.is_match(headers.next().unwrap_or_default()));
    assert!(new_header.is_match(headers.next().unwrap_or_default()));

    Ok(())
}
