// src/config/mod.rs
pub mod types;

pub use self::types::{DisplayConfig, GlyphwatchToml, ScanConfig};

use crate::error::{GlyphError, Result};
use crate::types::Markers;
use regex::Regex;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "glyphwatch.toml";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub display: DisplayConfig,
    pub include_patterns: Vec<Regex>,
    pub exclude_patterns: Vec<Regex>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `glyphwatch.toml` from the working directory, falling back to
    /// defaults when it does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads config from `path`; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is malformed TOML, or holds
    /// an invalid include/exclude regex.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(|e| GlyphError::io(e, path))?;
        let parsed: GlyphwatchToml = toml::from_str(&content).map_err(|source| GlyphError::Config {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_toml(parsed)
    }

    /// Builds a config from the parsed file, compiling scan patterns.
    ///
    /// # Errors
    /// Returns error if a pattern is not a valid regex.
    pub fn from_toml(file: GlyphwatchToml) -> Result<Self> {
        Ok(Self {
            display: file.display,
            include_patterns: compile(&file.scan.include)?,
            exclude_patterns: compile(&file.scan.exclude)?,
        })
    }

    #[must_use]
    pub fn markers(&self) -> Markers {
        Markers::new(&self.display.marker_open, &self.display.marker_close)
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(GlyphError::from))
        .collect()
}

/// Default `glyphwatch.toml` contents.
///
/// # Errors
/// Returns error if serialization fails.
pub fn default_toml() -> std::result::Result<String, toml::ser::Error> {
    toml::to_string_pretty(&GlyphwatchToml::default())
}

/// Writes the default config to `path` unless a file is already there.
/// Returns whether a file was written.
///
/// # Errors
/// Returns error if the write fails.
pub fn write_default(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let content = default_toml()?;
    fs::write(path, content).map_err(|e| GlyphError::io(e, path))?;
    Ok(true)
}
