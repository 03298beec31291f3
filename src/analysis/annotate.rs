// src/analysis/annotate.rs
//! Forward, single-pass construction of the annotated text.
//!
//! Normal units accumulate into a pending run; a suspicious unit flushes the
//! run and becomes its own span. Nothing is ever inserted behind the cursor,
//! so no recorded position can drift.

use crate::types::{AnnotatedText, Span, SpanKind};

#[derive(Debug, Default)]
pub struct AnnotationBuilder {
    spans: Vec<Span>,
    pending: String,
}

impl AnnotationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_normal(&mut self, c: char) {
        self.pending.push(c);
    }

    pub fn push_suspicious(&mut self, c: char) {
        self.flush();
        self.spans.push(Span {
            kind: SpanKind::Suspicious,
            text: c.to_string(),
        });
    }

    #[must_use]
    pub fn finish(mut self) -> AnnotatedText {
        self.flush();
        AnnotatedText { spans: self.spans }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        self.spans.push(Span {
            kind: SpanKind::Normal,
            text: std::mem::take(&mut self.pending),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Markers;

    #[test]
    fn test_normal_runs_coalesce() {
        let mut b = AnnotationBuilder::new();
        for c in "abc".chars() {
            b.push_normal(c);
        }
        let text = b.finish();
        assert_eq!(text.spans.len(), 1);
        assert_eq!(text.spans[0].text, "abc");
    }

    #[test]
    fn test_adjacent_suspicious_stay_separate() {
        let mut b = AnnotationBuilder::new();
        b.push_suspicious('\t');
        b.push_suspicious('\r');
        b.push_normal('x');
        let text = b.finish();
        assert_eq!(text.spans.len(), 3);
        assert_eq!(text.render(&Markers::default()), "[[\t]][[\r]]x");
    }

    #[test]
    fn test_empty_builder() {
        assert!(AnnotationBuilder::new().finish().is_empty());
    }
}
