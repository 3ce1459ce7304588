use crate::common::command::{seqdiff_stdout, sources_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_changed_blocks_side_by_side(
    sources_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    // the first hunk only deletes, so its new side carries no lines
    let expected_output = "*** a.rs\n--- b.rs\n***************\n*** 3,7 ****\n      std::io::stdin().read_line(&mut s).unwrap();\n-     for i in 0..1000000000 {\n-         println!(\"{}\",  s);\n-     }\n  \n--- 3,4 ----\n***************\n*** 15,17 ****\n  \n!     tx.join().unwrap();\n  \n--- 12,16 ----\n  \n!     if let Err(e) = tx.join() {\n!         eprintln!(\"Thread error: {}\", e);\n!     }\n  \n";

    let actual_output = seqdiff_stdout(
        sources_dir.path(),
        &["context", "a.rs", "b.rs", "-C", "1", "--no-dates"],
    )?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
