use crate::common::command::{seqdiff_stdout, sources_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_hunks_with_default_context(sources_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = "--- a.rs\n+++ b.rs\n@@ -1,9 +1,6 @@\n fn main() {\n     let s = String::new();\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n     println!(\"Done\");\n \n@@ -13,7 +10,9 @@\n         }\n     });\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n     println!(\"All threads completed\");\n }\n";

    let actual_output =
        seqdiff_stdout(sources_dir.path(), &["unified", "a.rs", "b.rs", "--no-dates"])?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
