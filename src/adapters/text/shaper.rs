//! Implements Shaper: Arabic-script contextual shaping, then visual reordering.
//!
//! Glyph rasterizers draw codepoints left to right without shaping, so the
//! corpus has to carry presentation forms in visual order before layout.

use crate::ports::Shaper;
use ar_reshaper::ArabicReshaper;
use unicode_bidi::BidiInfo;

#[derive(Debug, Default, Clone, Copy)]
pub struct ArabicShaper;

impl ArabicShaper {
    pub fn new() -> Self {
        Self
    }
}

/// Reorder every paragraph from logical to visual order.
pub fn visual_order(text: &str) -> String {
    let info = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());
    for para in &info.paragraphs {
        out.push_str(&info.reorder_line(para, para.range.clone()));
    }
    out
}

impl Shaper for ArabicShaper {
    fn shape(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let reshaped = ArabicReshaper::default().reshape(text);
        visual_order(&reshaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_untouched() {
        assert_eq!(ArabicShaper::new().shape("hello world"), "hello world");
        assert_eq!(ArabicShaper::new().shape(""), "");
    }

    #[test]
    fn test_persian_is_shaped_and_reversed() {
        // سلام -> initial seen, lam-alef ligature, isolated meem; then visual order.
        assert_eq!(
            ArabicShaper::new().shape("سلام"),
            "\u{FEE1}\u{FEFC}\u{FEB3}"
        );
    }

    #[test]
    fn test_visual_order_reverses_rtl_runs_only() {
        assert_eq!(visual_order("abc"), "abc");
        assert_eq!(visual_order("\u{05D0}\u{05D1}\u{05D2}"), "\u{05D2}\u{05D1}\u{05D0}");
    }

    #[test]
    fn test_word_count_preserved() {
        let text = "سلام دنیا سلام";
        let shaped = ArabicShaper::new().shape(text);
        assert_eq!(shaped.split_whitespace().count(), 3);
    }
}
