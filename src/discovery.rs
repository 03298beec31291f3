// src/discovery.rs
//! Expands command-line paths into the list of files to scan.

use crate::config::Config;
use crate::error::{GlyphError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "target",
    "dist",
    "build",
    ".venv",
    "venv",
    "__pycache__",
    ".cache",
];

pub const BIN_EXT_PATTERN: &str = r"(?i)\.(png|jpe?g|gif|ico|icns|webp|bmp|tiff?|woff2?|ttf|otf|pdf|mp4|mov|mkv|avi|mp3|wav|flac|ogg|zip|gz|bz2|xz|7z|rar|jar|parquet|sqlite|db|bin|exe|dll|so|dylib|o|a|class|pyc|pkl|onnx|tgz|zst)$";

static BIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BIN_EXT_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Files to scan plus the walk errors met on the way.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Unreadable entries; the walk continues past them.
    pub errors: Vec<(PathBuf, GlyphError)>,
}

impl Discovery {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.errors.is_empty()
    }
}

/// Expands `paths`: files are kept as given (explicit requests bypass every
/// filter), directories are walked recursively and filtered.
///
/// # Errors
/// Returns error if a path does not exist.
pub fn discover(paths: &[PathBuf], config: &Config) -> Result<Discovery> {
    let mut found = Discovery::default();
    for path in paths {
        if path.is_dir() {
            let (files, errors) = walk_directory(path);
            tracing::debug!(
                dir = %path.display(),
                files = files.len(),
                errors = errors.len(),
                "walked directory"
            );
            found
                .files
                .extend(filter_config(filter_binary(files), path, config));
            found.errors.extend(errors);
        } else if path.exists() {
            found.files.push(path.clone());
        } else {
            return Err(GlyphError::NotFound { path: path.clone() });
        }
    }
    Ok(found)
}

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

fn walk_directory(root: &Path) -> (Vec<PathBuf>, Vec<(PathBuf, GlyphError)>) {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let mut paths = Vec::new();
    let mut errors = Vec::new();
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                errors.push((path, GlyphError::from(e)));
            }
        }
    }
    (paths, errors)
}

fn filter_binary(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|p| {
            let name = p.file_name().map_or("", |f| f.to_str().unwrap_or(""));
            !BIN_RE.is_match(name)
        })
        .collect()
}

/// Root-relative path with forward slashes, the form patterns are written in.
fn pattern_subject(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

fn filter_config(mut paths: Vec<PathBuf>, root: &Path, config: &Config) -> Vec<PathBuf> {
    if !config.include_patterns.is_empty() {
        paths.retain(|p| {
            let s = pattern_subject(p, root);
            config.include_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    if !config.exclude_patterns.is_empty() {
        paths.retain(|p| {
            let s = pattern_subject(p, root);
            !config.exclude_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    paths
}
