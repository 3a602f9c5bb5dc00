//! Directory traversal with scoped exclusion filtering
//!
//! This module is the traversal core: a recursive walker that visits a
//! directory tree once, applying `.gitignore`-style exclusion rules with
//! directory scoping, and streams what it finds to caller-supplied sinks.
//!
//! - `pattern`: compiles ignore lines into matchable rules
//! - `scope`: stacks one rule scope per directory on the recursion path
//! - `walker`: drives the traversal and the structure/source sinks

mod pattern;
mod scope;
mod walker;

// Re-export public types
pub use pattern::{ExcludePattern, IGNORE_FILE, load_ignore_file, parse_patterns};
pub use scope::{ScopeGuard, ScopeStack};
pub use walker::{SourceSink, StructureSink, WalkConfig, WalkSummary, Walker};
