// src/types.rs
use crate::classifier::{is_suspicious, Verdict};
use serde::Serialize;

/// One element of the analyzed text: a single Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterUnit {
    pub value: char,
    pub codepoint: u32,
    /// Zero-based index in code points, not bytes.
    pub position: usize,
}

impl CharacterUnit {
    #[must_use]
    pub fn new(position: usize, value: char) -> Self {
        Self {
            value,
            codepoint: u32::from(value),
            position,
        }
    }
}

/// Aggregate over every occurrence of one distinct unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub value: char,
    pub codepoint: u32,
    pub count: usize,
    pub verdict: Verdict,
    pub label: String,
}

impl FrequencyEntry {
    #[must_use]
    pub fn is_suspicious(&self) -> bool {
        self.verdict.is_suspicious()
    }
}

/// A flagged unit, kept in encounter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuspiciousOccurrence {
    pub position: usize,
    pub value: char,
    pub codepoint: u32,
}

impl From<CharacterUnit> for SuspiciousOccurrence {
    fn from(unit: CharacterUnit) -> Self {
        Self {
            position: unit.position,
            value: unit.value,
            codepoint: unit.codepoint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Normal,
    Suspicious,
}

/// A style-tagged run of the original text. Suspicious spans hold exactly one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

/// Open/close strings wrapped around suspicious units in plain renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub open: String,
    pub close: String,
}

impl Markers {
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Undoes [`AnnotatedText::render`]: removes only the markers wrapped
    /// around suspicious units, so marker-like text from the input survives.
    ///
    /// Each suspicious unit in `rendered` must sit directly between `open`
    /// and `close`. Returns `None` otherwise, which includes markers that
    /// themselves contain suspicious characters.
    #[must_use]
    pub fn strip(&self, rendered: &str) -> Option<String> {
        let mut out = String::with_capacity(rendered.len());
        let mut rest = rendered;
        while let Some(c) = rest.chars().next() {
            rest = &rest[c.len_utf8()..];
            if is_suspicious(c) {
                let keep = out.strip_suffix(self.open.as_str())?.len();
                out.truncate(keep);
                out.push(c);
                rest = rest.strip_prefix(self.close.as_str())?;
            } else {
                out.push(c);
            }
        }
        Some(out)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new("[[", "]]")
    }
}

/// The original text as a sequence of tagged spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnnotatedText {
    pub spans: Vec<Span>,
}

impl AnnotatedText {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Renders the text with each suspicious unit wrapped in `markers`.
    #[must_use]
    pub fn render(&self, markers: &Markers) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span.kind {
                SpanKind::Normal => out.push_str(&span.text),
                SpanKind::Suspicious => {
                    out.push_str(&markers.open);
                    out.push_str(&span.text);
                    out.push_str(&markers.close);
                }
            }
        }
        out
    }

    /// Concatenated spans; always equal to the analyzed input.
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Everything the analyzer produces for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub frequencies: Vec<FrequencyEntry>,
    pub suspicious: Vec<SuspiciousOccurrence>,
    pub annotated: AnnotatedText,
}

impl AnalysisResult {
    /// Input length in code points.
    #[must_use]
    pub fn total_units(&self) -> usize {
        self.frequencies.iter().map(|e| e.count).sum()
    }

    #[must_use]
    pub fn suspicious_count(&self) -> usize {
        self.suspicious.len()
    }

    #[must_use]
    pub fn has_suspicious(&self) -> bool {
        !self.suspicious.is_empty()
    }

    /// The reduced table: suspicious rows only, still ascending by code point.
    pub fn suspicious_entries(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.frequencies.iter().filter(|e| e.is_suspicious())
    }
}
