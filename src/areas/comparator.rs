use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A file loaded for comparison, with the label and date shown in headers.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub label: String,
    pub content: String,
    pub modified: String,
}

/// Entry point of every command: resolves paths against a working directory
/// and owns the writer all output goes to.
pub struct Comparator {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparator {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Comparator {
            workspace: Workspace::new(path.into_boxed_path()),
            writer: RefCell::new(writer),
        })
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Workspace rooted at `dir`, relative to the working directory.
    pub fn workspace_at(&self, dir: &str) -> anyhow::Result<Workspace> {
        let path = self.path().join(dir).canonicalize()?;
        Ok(Workspace::new(path.into_boxed_path()))
    }

    /// Reads `file`; `modified` stays empty unless `with_date` is set.
    pub fn load(&self, file: &str, with_date: bool) -> anyhow::Result<LoadedFile> {
        let path = Path::new(file);
        let content = self.workspace.read_file(path)?;
        let modified = if with_date {
            self.workspace.modified_time(path)?
        } else {
            String::new()
        };

        Ok(LoadedFile {
            label: file.to_string(),
            content,
            modified,
        })
    }
}
