// tests/common/mod.rs
//! Shared fixtures for the CLI suites.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory tree removed on drop.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create `rel` (and its parent directories) with the given contents.
    pub fn write_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
        path
    }

    #[allow(dead_code)]
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("Failed to create {}: {e}", path.display()));
        path
    }
}
