//! Configuration profiles
//!
//! A profile bundles the include-extension allow-list with the baseline
//! exclusion patterns for one kind of project. Built-in profiles cover
//! common stacks; an optional JSON settings file can add profiles,
//! override built-ins by name, and pick the default selection.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the settings file looked up inside the walk root.
pub const CONFIG_FILE: &str = "press.json";

/// Profile used when neither the command line nor the settings file
/// selects one.
pub const DEFAULT_PROFILE: &str = "dotnet";

/// Errors raised while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown profile '{0}'")]
    UnknownProfile(String),
}

/// One named collection bundle: which extensions to collect and which
/// names to exclude from the entire walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Extensions collected into the document, leading dot included.
    pub include_extensions: Vec<String>,
    /// Ignore-style lines forming the walk's baseline exclusion scope.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Shape of the optional JSON settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Profile used when the command line does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_profile: Option<String>,
    /// Profiles added to the built-in set; a matching name overrides.
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl ConfigFile {
    /// Load and parse a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

fn profile(name: &str, extensions: &[&str], excludes: &[&str]) -> Profile {
    Profile {
        name: name.to_string(),
        include_extensions: extensions.iter().map(|s| s.to_string()).collect(),
        exclude_patterns: excludes.iter().map(|s| s.to_string()).collect(),
    }
}

/// The profiles compiled into the binary.
pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        profile(
            "dotnet",
            &[".cs", ".js", ".css", ".cshtml", ".cshtml.cs"],
            &["obj", "bin", ".git", "wwwroot", ".idea", ".vs"],
        ),
        profile(
            "rust",
            &[".rs", ".toml"],
            &["target", ".git", ".idea", ".vs"],
        ),
        profile(
            "web",
            &[".js", ".ts", ".jsx", ".tsx", ".css", ".html"],
            &["node_modules", "dist", ".git", ".idea", ".vs"],
        ),
    ]
}

/// Resolve the effective profile.
///
/// `selection` (usually the `--profile` flag) wins, then the settings
/// file's `selected_profile`, then the built-in default. Profiles from
/// the settings file override built-ins with the same name.
pub fn resolve_profile(
    selection: Option<&str>,
    config: Option<&ConfigFile>,
) -> Result<Profile, ConfigError> {
    let mut profiles = builtin_profiles();
    if let Some(config) = config {
        for profile in &config.profiles {
            match profiles.iter_mut().find(|p| p.name == profile.name) {
                Some(existing) => *existing = profile.clone(),
                None => profiles.push(profile.clone()),
            }
        }
    }

    let name = selection
        .or_else(|| config.and_then(|c| c.selected_profile.as_deref()))
        .unwrap_or(DEFAULT_PROFILE);

    profiles
        .into_iter()
        .find(|p| p.name == name)
        .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
}
