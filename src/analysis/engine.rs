//! Batch scanning: load and analyze many sources in parallel.

use std::time::Instant;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::error::GlyphError;
use crate::input::{self, Source};
use crate::types::AnalysisResult;

/// Result for one source. Acquisition failures are kept per source so one
/// bad file does not abort the batch.
#[derive(Debug)]
pub struct ScanOutcome {
    pub label: String,
    pub text_len: usize,
    pub result: Result<AnalysisResult, GlyphError>,
}

impl ScanOutcome {
    /// A source that could not be read at all.
    #[must_use]
    pub fn failed(label: String, error: GlyphError) -> Self {
        Self {
            label,
            text_len: 0,
            result: Err(error),
        }
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.result.as_ref().ok()
    }
}

/// Outcomes in the order the sources were given.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub outcomes: Vec<ScanOutcome>,
    pub duration_ms: u128,
}

impl ScanReport {
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    #[must_use]
    pub fn total_suspicious(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(ScanOutcome::analysis)
            .map(AnalysisResult::suspicious_count)
            .sum()
    }

    /// Number of analyzed sources with at least one flagged unit.
    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(ScanOutcome::analysis)
            .filter(|r| r.has_suspicious())
            .count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

pub struct ScanEngine;

impl ScanEngine {
    /// Loads and analyzes every source. Each analysis is independent, so the
    /// work fans out across the rayon pool.
    #[must_use]
    pub fn scan(sources: &[Source]) -> ScanReport {
        let start = Instant::now();
        let outcomes: Vec<ScanOutcome> = sources.par_iter().map(scan_one).collect();
        let report = ScanReport {
            outcomes,
            duration_ms: start.elapsed().as_millis(),
        };
        tracing::debug!(
            sources = sources.len(),
            failed = report.failed_count(),
            ms = report.duration_ms,
            "batch scan finished"
        );
        report
    }
}

fn scan_one(source: &Source) -> ScanOutcome {
    match input::load(source) {
        Ok(loaded) => ScanOutcome {
            label: loaded.label,
            text_len: loaded.text.chars().count(),
            result: Ok(super::analyze(&loaded.text)),
        },
        Err(e) => {
            tracing::warn!(source = %source.label(), error = %e, "failed to load");
            ScanOutcome::failed(source.label(), e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_order_preserved_and_failures_isolated() {
        let sources = vec![
            Source::Text("clean".into()),
            Source::File(PathBuf::from("/definitely/not/here.txt")),
            Source::Text("tab\there".into()),
        ];
        let report = ScanEngine::scan(&sources);
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.outcomes[0].label, "Pasted Text");
        assert!(matches!(
            report.outcomes[1].result,
            Err(GlyphError::NotFound { .. })
        ));
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.total_suspicious(), 1);
        assert_eq!(report.flagged_count(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let report = ScanEngine::scan(&[]);
        assert!(report.outcomes.is_empty());
        assert!(!report.has_failures());
    }
}
