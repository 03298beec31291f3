// src/analysis/frequency.rs
use crate::classifier::{classify, display_label};
use crate::types::{CharacterUnit, FrequencyEntry};
use std::collections::HashMap;

/// Counts occurrences per distinct `(value, codepoint)` pair.
///
/// The map has no ordering guarantee; [`FrequencyTable::into_entries`] sorts
/// by code point on the way out.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<(char, u32), usize>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, unit: &CharacterUnit) {
        *self.counts.entry((unit.value, unit.codepoint)).or_insert(0) += 1;
    }

    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Rows ascending by code point.
    #[must_use]
    pub fn into_entries(self) -> Vec<FrequencyEntry> {
        let mut entries: Vec<FrequencyEntry> = self
            .counts
            .into_iter()
            .map(|((value, codepoint), count)| FrequencyEntry {
                value,
                codepoint,
                count,
                verdict: classify(codepoint),
                label: display_label(value).into_owned(),
            })
            .collect();
        entries.sort_by_key(|e| e.codepoint);
        entries
    }
}
