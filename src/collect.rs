//! Collection sinks fed by the walker
//!
//! Two plain accumulators: `StructureMap` renders one line per visited
//! entry, and `SourceFiles` keeps the ordered list of files whose names
//! pass an extension allow-list. Exclusion logic lives in the walk
//! module; these only record what they are handed.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::walk::{SourceSink, StructureSink};

/// Marker repeated once per depth level in structure lines.
const DEPTH_MARKER: char = '-';

/// Accumulates the structural map in visitation order.
///
/// Each entry becomes one line: the depth marker repeated `depth` times,
/// a space, then the bare name. Directories and files render the same
/// way; their position in the sequence carries the shape.
#[derive(Debug, Default)]
pub struct StructureMap {
    text: String,
}

impl StructureMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, name: &str, depth: usize) {
        for _ in 0..depth {
            self.text.push(DEPTH_MARKER);
        }
        self.text.push(' ');
        self.text.push_str(name);
        self.text.push('\n');
    }

    /// The accumulated map text.
    pub fn output(&self) -> &str {
        &self.text
    }

    /// Take ownership of the accumulated text.
    pub fn into_output(self) -> String {
        self.text
    }
}

impl StructureSink for StructureMap {
    fn add_directory(&mut self, name: &str, depth: usize) {
        self.push_line(name, depth);
    }

    fn add_file(&mut self, name: &str, depth: usize) {
        self.push_line(name, depth);
    }
}

/// Collects offered files whose names match the extension allow-list.
///
/// Extensions are configured with a leading dot (`.cs`); a missing dot
/// is supplied. Comparison is case-sensitive. A single-segment suffix
/// matches the path's final extension; a multi-segment suffix such as
/// `.cshtml.cs` matches the end of the whole file name, which
/// `Path::extension` cannot see.
#[derive(Debug, Default)]
pub struct SourceFiles {
    simple: HashSet<String>,
    compound: Vec<String>,
    files: Vec<PathBuf>,
}

impl SourceFiles {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut simple = HashSet::new();
        let mut compound = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref();
            let suffix = if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            };
            if suffix[1..].contains('.') {
                compound.push(suffix);
            } else {
                simple.insert(suffix[1..].to_string());
            }
        }
        Self {
            simple,
            compound,
            files: Vec::new(),
        }
    }

    fn is_included(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if self.simple.contains(ext) {
                return true;
            }
        }
        if self.compound.is_empty() {
            return false;
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.compound.iter().any(|suffix| name.ends_with(suffix)))
    }

    /// Collected files, in the order they were offered.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Take ownership of the collected list.
    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceSink for SourceFiles {
    fn offer(&mut self, path: &Path) {
        if self.is_included(path) {
            self.files.push(path.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer_all(sources: &mut SourceFiles, paths: &[&str]) {
        for path in paths {
            sources.offer(Path::new(path));
        }
    }

    #[test]
    fn test_structure_lines_use_depth_markers() {
        let mut map = StructureMap::new();
        map.add_directory("src", 1);
        map.add_file("main.cs", 2);
        map.add_file("readme.md", 1);
        assert_eq!(map.output(), "- src\n-- main.cs\n- readme.md\n");
    }

    #[test]
    fn test_structure_preserves_visitation_order() {
        let mut map = StructureMap::new();
        map.add_file("b.cs", 1);
        map.add_file("a.cs", 1);
        assert_eq!(map.into_output(), "- b.cs\n- a.cs\n");
    }

    #[test]
    fn test_simple_extension_filtering() {
        let mut sources = SourceFiles::new([".cs", ".js"]);
        offer_all(&mut sources, &["main.cs", "app.js", "style.css", "notes.txt"]);
        let names: Vec<_> = sources
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["main.cs", "app.js"]);
    }

    #[test]
    fn test_missing_leading_dot_is_supplied() {
        let mut sources = SourceFiles::new(["cs"]);
        sources.offer(Path::new("main.cs"));
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn test_extension_comparison_is_case_sensitive() {
        let mut sources = SourceFiles::new([".cs"]);
        sources.offer(Path::new("main.CS"));
        assert!(sources.is_empty());
    }

    #[test]
    fn test_compound_extension_matches_full_suffix() {
        let mut sources = SourceFiles::new([".cshtml.cs"]);
        offer_all(&mut sources, &["page.cshtml.cs", "plain.cs", "page.cshtml"]);
        let names: Vec<_> = sources
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["page.cshtml.cs"]);
    }

    #[test]
    fn test_simple_and_compound_together() {
        let mut sources = SourceFiles::new([".cs", ".cshtml.cs"]);
        offer_all(&mut sources, &["page.cshtml.cs", "plain.cs"]);
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn test_extensionless_files_not_collected() {
        let mut sources = SourceFiles::new([".cs"]);
        offer_all(&mut sources, &["Makefile", "build"]);
        assert!(sources.is_empty());
    }

    #[test]
    fn test_collection_keeps_offer_order() {
        let mut sources = SourceFiles::new([".cs"]);
        offer_all(&mut sources, &["z.cs", "a.cs", "m.cs"]);
        let names: Vec<_> = sources
            .into_files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["z.cs", "a.cs", "m.cs"]);
    }
}
