use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn source_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}
"#
    .to_string()
}

#[fixture]
pub fn source_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}
"#
    .to_string()
}

/// A workspace holding `a.rs` and `b.rs`, two revisions of the same program.
#[fixture]
pub fn sources_dir(workspace_dir: TempDir, source_a: String, source_b: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("a.rs"), source_a));
    write_file(FileSpec::new(workspace_dir.path().join("b.rs"), source_b));

    workspace_dir
}

/// A workspace where the classic and Myers matchers disagree on `a.txt` vs `b.txt`.
#[fixture]
pub fn ambiguous_dir(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join("a.txt"),
        "y\nx\ny\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("b.txt"),
        "x\nz\ny\n".to_string(),
    ));

    workspace_dir
}

pub fn run_seqdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("seqdiff").expect("Failed to find seqdiff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs the command, expects success, and returns its stdout.
pub fn seqdiff_stdout(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_seqdiff_command(dir, args).assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}
