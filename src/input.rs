// src/input.rs
//! Text acquisition. Every failure is reported here; the analyzer only ever
//! sees successfully decoded text.

use crate::error::{GlyphError, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Text(String),
    Stdin,
}

impl Source {
    /// Human-readable name used in report headers.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => format!("File: {}", path.display()),
            Self::Text(_) => "Pasted Text".to_string(),
            Self::Stdin => "Standard Input".to_string(),
        }
    }
}

/// Decoded text plus the label of where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub label: String,
    pub text: String,
}

/// Loads the text for `source`.
///
/// # Errors
/// Returns error if the file is missing or unreadable, if the bytes are not
/// valid UTF-8, or if literal text is empty.
pub fn load(source: &Source) -> Result<LoadedText> {
    let text = match source {
        Source::File(path) => read_file(path)?,
        Source::Text(raw) => literal(raw)?,
        Source::Stdin => read_stdin()?,
    };
    tracing::debug!(source = %source.label(), units = text.chars().count(), "loaded text");
    Ok(LoadedText {
        label: source.label(),
        text,
    })
}

/// Reads a file as strict UTF-8. Empty files are valid.
///
/// # Errors
/// Returns error if the file cannot be read or is not UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| GlyphError::io(e, path))?;
    decode(bytes, path)
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| GlyphError::io(e, "<stdin>"))?;
    decode(bytes, Path::new("<stdin>"))
}

fn decode(bytes: Vec<u8>, path: &Path) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| GlyphError::Decode {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Pasted text loses its trailing line feeds, like a text box would.
fn literal(raw: &str) -> Result<String> {
    let trimmed = raw.trim_end_matches('\n');
    if trimmed.is_empty() {
        return Err(GlyphError::EmptyInput);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_trims_trailing_newlines() {
        let loaded = load(&Source::Text("abc\n\n".into())).unwrap();
        assert_eq!(loaded.text, "abc");
        assert_eq!(loaded.label, "Pasted Text");
    }

    #[test]
    fn test_literal_keeps_other_trailing_whitespace() {
        let loaded = load(&Source::Text("abc\t\r\n".into())).unwrap();
        assert_eq!(loaded.text, "abc\t\r");
    }

    #[test]
    fn test_empty_literal_rejected() {
        assert!(matches!(
            load(&Source::Text("\n".into())),
            Err(GlyphError::EmptyInput)
        ));
    }

    #[test]
    fn test_file_label() {
        let src = Source::File(PathBuf::from("notes.txt"));
        assert_eq!(src.label(), "File: notes.txt");
    }
}
