//! Press - squeeze a directory tree into a single reviewable text file
//!
//! A walk visits every directory once, applying `.gitignore`-subset
//! exclusion rules with directory scoping, and feeds two sinks: one
//! records the structural map, the other collects files matching an
//! extension allow-list. Assembly then writes the map and the collected
//! contents into one combined document.

pub mod assemble;
pub mod collect;
pub mod config;
pub mod validate;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use assemble::{DocumentWriter, write_document};
pub use collect::{SourceFiles, StructureMap};
pub use config::{ConfigError, ConfigFile, Profile, builtin_profiles, resolve_profile};
pub use validate::{RootError, validate_root};
pub use walk::{
    ExcludePattern, ScopeStack, SourceSink, StructureSink, WalkConfig, WalkSummary, Walker,
};
