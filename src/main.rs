//! CLI entry point for press

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use press::config::CONFIG_FILE;
use press::{
    ConfigFile, SourceFiles, StructureMap, WalkConfig, Walker, resolve_profile, validate_root,
    write_document,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stderr is a TTY; that is where colored messages go
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "press")]
#[command(about = "Squeeze a directory tree into a single reviewable text file")]
#[command(version)]
struct Args {
    /// Directory to flatten
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file for the combined document
    #[arg(short = 'o', long = "output", default_value = "press.txt")]
    output: PathBuf,

    /// Profile naming the extensions and baseline excludes to use
    #[arg(short = 'p', long = "profile")]
    profile: Option<String>,

    /// Settings file (defaults to press.json inside the root, when present)
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Collect this extension instead of the profile's list (can be used multiple times)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    ext: Vec<String>,

    /// Exclude names matching this ignore-style pattern (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Print an error message to stderr, red when enabled, and exit.
fn fail(message: &str, use_color: bool) -> ! {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = writeln!(stderr, "press: {}", message);
    let _ = stderr.reset();
    process::exit(1);
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);

    let root = validate_root(&args.path).unwrap_or_else(|e| fail(&e.to_string(), use_color));

    // An explicit --config must load; the root's press.json is picked up
    // only when present.
    let config = match &args.config {
        Some(path) => Some(ConfigFile::load(path)),
        None => {
            let default = root.join(CONFIG_FILE);
            if default.exists() {
                Some(ConfigFile::load(&default))
            } else {
                None
            }
        }
    };
    let config = match config {
        Some(Ok(config)) => Some(config),
        Some(Err(e)) => fail(&e.to_string(), use_color),
        None => None,
    };

    let profile = resolve_profile(args.profile.as_deref(), config.as_ref())
        .unwrap_or_else(|e| fail(&e.to_string(), use_color));

    let extensions = if args.ext.is_empty() {
        profile.include_extensions.clone()
    } else {
        args.ext.clone()
    };

    let mut exclude_patterns = profile.exclude_patterns.clone();
    exclude_patterns.extend(args.exclude.iter().cloned());

    let walker = Walker::new(WalkConfig { exclude_patterns });
    let mut structure = StructureMap::new();
    let mut sources = SourceFiles::new(&extensions);
    let summary = walker.walk(&root, &mut structure, &mut sources);

    let mut files = sources.into_files();
    // Keep a previous run's document out of the new one.
    if let Ok(existing) = args.output.canonicalize() {
        files.retain(|file| {
            file.canonicalize()
                .map(|path| path != existing)
                .unwrap_or(true)
        });
    }

    if let Err(e) = write_document(&args.output, &root, structure.output(), &files) {
        fail(&format!("error writing output: {}", e), use_color);
    }

    if summary.skipped > 0 {
        eprintln!(
            "press: warning: {} directories could not be read",
            summary.skipped
        );
    }
    println!(
        "{} directories, {} files scanned, {} collected",
        summary.directories,
        summary.files,
        files.len()
    );
    println!("combined file created: {}", args.output.display());
}
