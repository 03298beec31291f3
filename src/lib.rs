pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod input;
pub mod logging;
pub mod reporting;
#[cfg(feature = "tui")]
pub mod tui;
pub mod types;

pub use analysis::analyze;
pub use classifier::{classify, classify_char, display_label, Verdict};
pub use types::{AnalysisResult, FrequencyEntry, Markers, SuspiciousOccurrence};
