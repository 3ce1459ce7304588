use crate::common::command::{seqdiff_stdout, sources_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_hunks_with_one_line_of_context(
    sources_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = "--- a.rs\n+++ b.rs\n@@ -3,5 +3,2 @@\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n@@ -15,3 +12,5 @@\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n";

    let actual_output = seqdiff_stdout(
        sources_dir.path(),
        &["unified", "a.rs", "b.rs", "-U", "1", "--no-dates"],
    )?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
