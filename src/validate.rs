//! Root directory validation
//!
//! A walk only starts on a path that exists, is a directory, can be
//! read, and contains at least one entry. Everything else is rejected
//! up front with a typed error so the caller can report it before any
//! output file is created.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a root path is rejected before traversal.
#[derive(Debug, Error)]
pub enum RootError {
    #[error("directory '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("directory '{}' contains no files or subdirectories", .0.display())]
    Empty(PathBuf),

    #[error("cannot read directory '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check that `path` is an existing, readable, non-empty directory.
pub fn validate_root(path: &Path) -> Result<PathBuf, RootError> {
    if !path.exists() {
        return Err(RootError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(RootError::NotADirectory(path.to_path_buf()));
    }
    let mut entries = fs::read_dir(path).map_err(|source| RootError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    if entries.next().is_none() {
        return Err(RootError::Empty(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn test_missing_path_rejected() {
        let tree = TestTree::new();
        let result = validate_root(&tree.path().join("nope"));
        assert!(matches!(result, Err(RootError::NotFound(_))));
    }

    #[test]
    fn test_file_path_rejected() {
        let tree = TestTree::new();
        let file = tree.add_file("main.cs", "code");
        let result = validate_root(&file);
        assert!(matches!(result, Err(RootError::NotADirectory(_))));
    }

    #[test]
    fn test_empty_directory_rejected() {
        let tree = TestTree::new();
        let result = validate_root(tree.path());
        assert!(matches!(result, Err(RootError::Empty(_))));
    }

    #[test]
    fn test_populated_directory_accepted() {
        let tree = TestTree::new();
        tree.add_file("main.cs", "code");
        let root = validate_root(tree.path()).expect("populated dir should validate");
        assert_eq!(root, tree.path());
    }

    #[test]
    fn test_directory_with_only_subdirectory_accepted() {
        let tree = TestTree::new();
        tree.add_dir("src");
        assert!(validate_root(tree.path()).is_ok());
    }

    #[test]
    fn test_error_message_names_the_path() {
        let tree = TestTree::new();
        let missing = tree.path().join("nope");
        let error = validate_root(&missing).unwrap_err();
        assert!(error.to_string().contains("nope"));
    }
}
