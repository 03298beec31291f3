// src/analysis/mod.rs
//! The analyzer: one pass that classifies, counts and annotates.

pub mod annotate;
pub mod engine;
pub mod frequency;

pub use engine::{ScanEngine, ScanOutcome, ScanReport};

use crate::classifier::classify;
use crate::types::{AnalysisResult, CharacterUnit, SuspiciousOccurrence};
use annotate::AnnotationBuilder;
use frequency::FrequencyTable;

/// Analyzes `text` unit by unit. Infallible; empty input yields an empty result.
#[must_use]
pub fn analyze(text: &str) -> AnalysisResult {
    let mut table = FrequencyTable::new();
    let mut suspicious = Vec::new();
    let mut builder = AnnotationBuilder::new();

    for (position, value) in text.chars().enumerate() {
        let unit = CharacterUnit::new(position, value);
        if classify(unit.codepoint).is_suspicious() {
            suspicious.push(SuspiciousOccurrence::from(unit));
            builder.push_suspicious(value);
        } else {
            builder.push_normal(value);
        }
        table.record(&unit);
    }

    tracing::trace!(
        distinct = table.distinct(),
        suspicious = suspicious.len(),
        "analysis pass complete"
    );

    let result = AnalysisResult {
        frequencies: table.into_entries(),
        suspicious,
        annotated: builder.finish(),
    };
    debug_assert_eq!(
        result.suspicious_entries().map(|e| e.count).sum::<usize>(),
        result.suspicious_count()
    );
    result
}
