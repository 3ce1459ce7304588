use anyhow::Context;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names skipped anywhere below a compared root.
const IGNORED_PATHS: [&str; 1] = [".git"];

/// Timestamp layout used in diff headers, as GNU diff prints it.
pub const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// A directory whose files are compared, addressed by relative paths.
#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every regular file below the root, relative to it, in path order.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        if !self.path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", self.path);
        }

        let mut files = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.relative_if_not_ignored(entry.path()))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| match component {
            std::path::Component::Normal(name) => {
                IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
            }
            _ => false,
        })
    }

    fn relative_if_not_ignored(&self, path: &Path) -> Option<PathBuf> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;
        (!Self::is_ignored(relative)).then(|| relative.to_path_buf())
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))
    }

    /// Raw contents of a file, for files that may not be text.
    pub fn read_bytes(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path).with_context(|| format!("Failed to read {}", file_path.display()))
    }

    /// Modification time of a file, formatted for a diff header.
    pub fn modified_time(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);
        let modified = std::fs::metadata(&file_path)
            .and_then(|metadata| metadata.modified())
            .with_context(|| format!("Failed to stat {}", file_path.display()))?;

        Ok(DateTime::<Local>::from(modified)
            .format(HEADER_TIME_FORMAT)
            .to_string())
    }
}

/// Splits text into lines, each keeping its terminator.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// The line without its `\n` or `\r\n` terminator.
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(line)
}
