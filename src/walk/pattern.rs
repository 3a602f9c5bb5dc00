//! Ignore-pattern compilation
//!
//! Compiles the lines of a `.gitignore`-style file into matchable
//! exclusion rules. Only a small subset of gitignore syntax is supported:
//! blank lines and `#` comments contribute nothing, `!` negations are
//! dropped, a trailing `/` marks a directory-only rule, and `*` / `?` are
//! the only wildcards. Rules match a bare entry name, never a path.

use std::fs;
use std::path::Path;

use regex::{Regex, RegexBuilder};

/// Name of the per-directory ignore file picked up during traversal.
pub const IGNORE_FILE: &str = ".gitignore";

/// A single compiled exclusion rule.
///
/// Matching is anchored to the whole name and case-insensitive.
/// Directory-only rules (trailing `/` in the source line) never match
/// plain files, so `build/` leaves a file named `build` alone.
#[derive(Debug, Clone)]
pub struct ExcludePattern {
    regex: Regex,
    dir_only: bool,
}

impl ExcludePattern {
    /// Compile one ignore line.
    ///
    /// Returns `None` for lines that contribute no rule: blanks, `#`
    /// comments, `!` negations, and the rare line that fails to compile.
    pub fn compile(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            return None;
        }

        let dir_only = trimmed.ends_with('/');
        let stem = trimmed.trim_end_matches('/');

        // Escape everything, then reintroduce the two supported wildcards.
        let mut pattern = String::with_capacity(stem.len() + 8);
        pattern.push('^');
        pattern.push_str(
            &regex::escape(stem)
                .replace(r"\*", ".*")
                .replace(r"\?", "."),
        );
        if dir_only {
            // Names occasionally arrive with a trailing separator attached.
            pattern.push_str(r"[/\\]?");
        }
        pattern.push('$');

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .ok()?;

        Some(Self { regex, dir_only })
    }

    /// Test a bare file or directory name against this rule.
    pub fn matches(&self, name: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        self.regex.is_match(name)
    }
}

/// Parse the contents of an ignore file into compiled rules.
///
/// Lines that contribute no rule are silently skipped, so the result may
/// be empty.
pub fn parse_patterns(content: &str) -> Vec<ExcludePattern> {
    content.lines().filter_map(ExcludePattern::compile).collect()
}

/// Load and parse the ignore file directly inside `dir`.
///
/// A missing or unreadable file yields no rules; this never fails.
pub fn load_ignore_file(dir: &Path) -> Vec<ExcludePattern> {
    match fs::read_to_string(dir.join(IGNORE_FILE)) {
        Ok(content) => parse_patterns(&content),
        Err(_) => Vec::new(),
    }
}
