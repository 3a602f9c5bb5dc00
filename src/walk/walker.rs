//! Walker - recursive traversal with scoped exclusion filtering
//!
//! Streams structure and collection events to caller-supplied sinks
//! instead of building a tree in memory, so traversal uses O(depth)
//! state. Each directory's `.gitignore` is pushed as a scope on the way
//! in and popped on the way out; see the scope module for the rules.

use std::fs;
use std::path::Path;

use super::pattern::{ExcludePattern, load_ignore_file};
use super::scope::ScopeStack;

/// Callback for structural output - receives every visited entry.
///
/// Depth 1 is a direct child of the walk root; the root itself is never
/// reported. Files excluded from collection still arrive here, so the
/// structural record stays a faithful picture of the tree.
pub trait StructureSink {
    fn add_directory(&mut self, name: &str, depth: usize);
    fn add_file(&mut self, name: &str, depth: usize);
}

/// Callback for collection - receives files that survived exclusion.
///
/// Any further filtering (extension allow-lists, size caps) belongs to
/// the sink, not the walker.
pub trait SourceSink {
    fn offer(&mut self, path: &Path);
}

/// Configuration for a walk.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Ignore-style lines compiled into a baseline scope that stays
    /// active for the entire traversal.
    pub exclude_patterns: Vec<String>,
}

/// Counters reported by a completed walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directories reported to the structure sink.
    pub directories: usize,
    /// Files reported to the structure sink.
    pub files: usize,
    /// Directories that could not be read and were skipped.
    pub skipped: usize,
}

/// Recursive walker driving both sinks in a single pass.
///
/// Per directory: subdirectory subtrees are emitted first, in name
/// order, then the directory's own files, in name order. An excluded
/// directory is pruned whole; an excluded file is recorded in the
/// structure but never offered for collection.
pub struct Walker {
    baseline: Vec<ExcludePattern>,
}

impl Walker {
    pub fn new(config: WalkConfig) -> Self {
        let baseline = config
            .exclude_patterns
            .iter()
            .filter_map(|line| ExcludePattern::compile(line))
            .collect();
        Self { baseline }
    }

    /// Walk `root`, feeding both sinks, and report what was visited.
    pub fn walk<S, F>(&self, root: &Path, structure: &mut S, sources: &mut F) -> WalkSummary
    where
        S: StructureSink,
        F: SourceSink,
    {
        let mut scopes = ScopeStack::with_baseline(self.baseline.clone());
        let mut summary = WalkSummary::default();
        self.process_dir(root, 1, &mut scopes, structure, sources, &mut summary);
        summary
    }

    fn process_dir<S, F>(
        &self,
        dir: &Path,
        depth: usize,
        scopes: &mut ScopeStack,
        structure: &mut S,
        sources: &mut F,
        summary: &mut WalkSummary,
    ) where
        S: StructureSink,
        F: SourceSink,
    {
        // Push this directory's rules; the guard pops them on any return.
        let mut scopes = scopes.enter(load_ignore_file(dir));

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                summary.skipped += 1;
                return;
            }
        };

        // Split and sort so subdirectories come before this level's files.
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(_) => continue,
            };
            // Skip symlinks to prevent infinite loops through linked dirs
            if file_type.is_symlink() {
                continue;
            }
            if file_type.is_dir() {
                dirs.push(entry);
            } else if file_type.is_file() {
                files.push(entry);
            }
        }
        dirs.sort_by_key(|a| a.file_name());
        files.sort_by_key(|a| a.file_name());

        for entry in dirs {
            let name = entry.file_name().to_string_lossy().to_string();
            // An excluded directory is pruned with its whole subtree.
            if scopes.is_excluded(&name, true) {
                continue;
            }
            structure.add_directory(&name, depth);
            summary.directories += 1;
            self.process_dir(&entry.path(), depth + 1, &mut scopes, structure, sources, summary);
        }

        for entry in files {
            let name = entry.file_name().to_string_lossy().to_string();
            // Exclusion hides a file from collection, never from the map.
            structure.add_file(&name, depth);
            summary.files += 1;
            if !scopes.is_excluded(&name, false) {
                sources.offer(&entry.path());
            }
        }
    }
}
