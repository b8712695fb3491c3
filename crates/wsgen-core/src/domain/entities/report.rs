use std::path::{Path, PathBuf};

use serde::Serialize;

/// What a completed build did, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkspaceReport {
    pub root: PathBuf,
    pub purged: bool,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl WorkspaceReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub(crate) fn record_directory(&mut self, path: &Path) {
        self.directories.push(path.to_path_buf());
    }

    pub(crate) fn record_file(&mut self, path: &Path) {
        self.files.push(path.to_path_buf());
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
