// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{} is not valid UTF-8 (first invalid byte at offset {valid_up_to})", path.display())]
    Decode { path: PathBuf, valid_up_to: usize },

    #[error("No text to analyze")]
    EmptyInput,

    #[error("Invalid config in {}: {source}", path.display())]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, GlyphError>;

impl GlyphError {
    /// Wraps an I/O error, mapping `NotFound` to its own variant.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { source, path }
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for GlyphError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("<unknown>"));
        match e.into_io_error() {
            Some(source) => Self::io(source, path),
            None => Self::Io {
                source: std::io::Error::other("filesystem loop detected"),
                path,
            },
        }
    }
}
