//! Presentation of analysis results: coloured console text or JSON.
//!
//! Nothing here decides what is suspicious; renderers only map the span and
//! verdict tags in an [`AnalysisResult`](crate::types::AnalysisResult) onto a
//! medium.

pub mod console;
pub mod json;

use crate::config::Config;
use crate::types::Markers;

pub use console::{format_report, format_summary, print_report};
pub use json::format_json;

/// Rendering switches resolved from config and command-line flags.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub color: bool,
    pub suspicious_only: bool,
    pub markers: Markers,
}

impl ReportOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.display.color,
            suspicious_only: config.display.suspicious_only,
            markers: config.markers(),
        }
    }

    /// Plain output with default markers, as used for piping and tests.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            suspicious_only: false,
            markers: Markers::default(),
        }
    }
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
