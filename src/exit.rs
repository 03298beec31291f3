// src/exit.rs
//! Standardized process exit codes for `glyphwatch`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::GlyphError;
use colored::Colorize;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum GlyphExit {
    /// Every source was analyzed (suspicious characters alone are not a failure).
    Success = 0,
    /// Generic error (I/O, decode, config), or any source in a batch failed.
    Error = 1,
    /// Nothing to analyze (no paths, empty literal text).
    InvalidInput = 2,
    /// Suspicious characters found while running with `--strict`.
    SuspiciousFound = 3,
}

impl GlyphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for GlyphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<GlyphExit>> for GlyphExit {
    fn from(res: anyhow::Result<GlyphExit>) -> Self {
        match res {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                match e.downcast_ref::<GlyphError>() {
                    Some(GlyphError::EmptyInput) => Self::InvalidInput,
                    _ => Self::Error,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_distinct() {
        let codes = [
            GlyphExit::Success.code(),
            GlyphExit::Error.code(),
            GlyphExit::InvalidInput.code(),
            GlyphExit::SuspiciousFound.code(),
        ];
        assert_eq!(codes, [0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_input_maps_to_invalid() {
        let res: anyhow::Result<GlyphExit> = Err(GlyphError::EmptyInput.into());
        assert_eq!(GlyphExit::from(res), GlyphExit::InvalidInput);
    }
}
