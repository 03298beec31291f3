// src/classifier.rs
//! Per-unit classification: printable ASCII plus line feed is normal,
//! everything else is suspicious.

use serde::Serialize;
use std::borrow::Cow;
use std::ops::RangeInclusive;

/// Code points 32..=126: space through tilde.
pub const PRINTABLE_ASCII: RangeInclusive<u32> = 32..=126;

/// Line feed is the only control code accepted as normal.
pub const LINE_FEED: u32 = 10;

/// Verdict for a single character unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Normal,
    Suspicious,
}

impl Verdict {
    #[must_use]
    pub fn is_suspicious(self) -> bool {
        self == Self::Suspicious
    }
}

/// Classifies a code point. Total over every `u32`, including values that are
/// not valid scalar values.
#[must_use]
pub fn classify(codepoint: u32) -> Verdict {
    if PRINTABLE_ASCII.contains(&codepoint) || codepoint == LINE_FEED {
        Verdict::Normal
    } else {
        Verdict::Suspicious
    }
}

#[must_use]
pub fn classify_char(c: char) -> Verdict {
    classify(u32::from(c))
}

#[must_use]
pub fn is_suspicious(c: char) -> bool {
    classify_char(c).is_suspicious()
}

/// Human-readable label for a unit in tables. Independent of the verdict:
/// tab gets its own label even though it is flagged and space is not.
#[must_use]
pub fn display_label(c: char) -> Cow<'static, str> {
    match c {
        ' ' => Cow::Borrowed("SPACE"),
        '\n' => Cow::Borrowed("\\n"),
        '\t' => Cow::Borrowed("\\t"),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_band_is_normal() {
        for cp in 32..=126 {
            assert_eq!(classify(cp), Verdict::Normal, "cp {cp}");
        }
    }

    #[test]
    fn test_line_feed_is_normal() {
        assert_eq!(classify_char('\n'), Verdict::Normal);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(classify(31), Verdict::Suspicious);
        assert_eq!(classify(32), Verdict::Normal);
        assert_eq!(classify(126), Verdict::Normal);
        assert_eq!(classify(127), Verdict::Suspicious);
        assert_eq!(classify(128), Verdict::Suspicious);
    }

    #[test]
    fn test_low_controls_are_suspicious() {
        for cp in (0..32).filter(|&cp| cp != LINE_FEED) {
            assert_eq!(classify(cp), Verdict::Suspicious, "cp {cp}");
        }
    }

    #[test]
    fn test_tab_and_carriage_return_flagged() {
        assert!(is_suspicious('\t'));
        assert!(is_suspicious('\r'));
    }

    #[test]
    fn test_non_ascii_flagged() {
        assert!(is_suspicious('\u{200B}'));
        assert!(is_suspicious('é'));
        assert!(is_suspicious('а')); // cyrillic a
        assert!(is_suspicious('\u{10FFFF}'));
    }

    #[test]
    fn test_classify_total_and_deterministic() {
        for cp in 0..=0x10_FFFF_u32 {
            let first = classify(cp);
            assert_eq!(first, classify(cp));
            assert_eq!(first.is_suspicious(), !(PRINTABLE_ASCII.contains(&cp) || cp == 10));
        }
        assert_eq!(classify(u32::MAX), Verdict::Suspicious);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(display_label(' '), "SPACE");
        assert_eq!(display_label('\n'), "\\n");
        assert_eq!(display_label('\t'), "\\t");
        assert_eq!(display_label('x'), "x");
        assert_eq!(display_label('\u{200B}'), "\u{200B}");
    }

    #[test]
    fn test_tab_label_is_not_space() {
        assert_ne!(display_label('\t'), display_label(' '));
        assert!(is_suspicious('\t'));
        assert!(!is_suspicious(' '));
    }
}
