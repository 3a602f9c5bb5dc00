//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Provides methods for creating files, directories, and ignore files
/// relative to the tree root. The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path of the tree root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a directory, including any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dirs");
        full_path
    }

    /// Write a `.gitignore` in the given subdirectory; "" means the root.
    pub fn add_gitignore(&self, dir: &str, content: &str) -> PathBuf {
        if dir.is_empty() {
            self.add_file(".gitignore", content)
        } else {
            self.add_file(&format!("{}/.gitignore", dir), content)
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
