//! Configuration management for dumpgrammar.
//!
//! This module provides the [`Config`] struct which controls extraction.
//! Configuration can be loaded from:
//! - TOML files (`dumpgrammar.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the
//! working directory up to the filesystem root, plus the user's home directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["dumpgrammar.toml"];

/// Source file read when none is given
pub const DEFAULT_SOURCE: &str = "grammar.c";

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE)
}
fn default_prefix_width() -> usize {
    3
}

/// Main configuration struct for dumpgrammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Grammar-annotated source file (default: grammar.c)
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Characters removed from the start of each trimmed rule line (default: 3,
    /// the width of `// `)
    #[serde(default = "default_prefix_width")]
    pub prefix_width: usize,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub source: Option<PathBuf>,
    pub prefix_width: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: default_source(),
            prefix_width: default_prefix_width(),
        }
    }
}

impl Config {
    /// Maximum prefix width
    const MAX_PREFIX_WIDTH: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.source.as_os_str().is_empty() {
            return Some("source must not be empty".to_string());
        }
        if self.prefix_width > Self::MAX_PREFIX_WIDTH {
            return Some(format!(
                "prefix_width {} exceeds maximum of {}",
                self.prefix_width,
                Self::MAX_PREFIX_WIDTH
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    ///
    /// A relative `source` is resolved against the config file's directory.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_partial(&load_partial(path)?, path.parent());
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig, base_dir: Option<&Path>) {
        if let Some(source) = &partial.source {
            self.source = match base_dir {
                Some(dir) if source.is_relative() && !dir.as_os_str().is_empty() => {
                    dir.join(source)
                }
                _ => source.clone(),
            };
        }
        if let Some(v) = partial.prefix_width {
            self.prefix_width = v;
        }
    }

    /// Discover config files from `start_dir` and its ancestors
    ///
    /// Returns list of config file paths in order of priority (least specific first):
    /// the home directory config, then each ancestor from the root down.
    #[must_use]
    pub fn discover_config_files(start_dir: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let mut ancestors: Vec<&Path> = start_dir.ancestors().collect();
        ancestors.reverse();

        for ancestor in ancestors {
            for config_name in CONFIG_FILE_NAMES {
                let config_path = ancestor.join(config_name);
                if config_path.is_file() && !config_files.contains(&config_path) {
                    config_files.push(config_path);
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Files that cannot be read or parsed are skipped with a warning.
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_dir: &Path) -> Self {
        let mut config = Self::default();
        for path in Self::discover_config_files(start_dir) {
            match load_partial(&path) {
                Ok(partial) => config.apply_partial(&partial, path.parent()),
                Err(e) => eprintln!("Warning: skipping {}: {e:#}", path.display()),
            }
        }
        config
    }
}

fn load_partial(path: &Path) -> anyhow::Result<PartialConfig> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
