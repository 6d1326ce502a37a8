//! Implements TextNormalizer for Persian orthography.
//!
//! Unifies Arabic letter variants with their Persian forms, strips harakat and
//! tatweel, maps digits to Persian digits and tidies zero-width non-joiners and
//! spacing. Token boundaries are never moved: a normalized token is still one
//! token.

use crate::ports::TextNormalizer;
use unicode_normalization::UnicodeNormalization;

const ZWNJ: char = '\u{200C}';
const TATWEEL: char = '\u{0640}';

/// Persian normalizer.
#[derive(Debug, Clone, Copy)]
pub struct PersianNormalizer {
    persian_digits: bool,
}

impl Default for PersianNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PersianNormalizer {
    pub fn new() -> Self {
        Self {
            persian_digits: true,
        }
    }

    /// Keep ASCII and Arabic-Indic digits as they are.
    pub fn without_digit_mapping(mut self) -> Self {
        self.persian_digits = false;
        self
    }

    fn refine(&self, c: char, out: &mut String) {
        match c {
            '\u{064B}'..='\u{0652}' | TATWEEL => {}
            'ك' => out.push('ک'),
            'ي' | 'ى' => out.push('ی'),
            'ة' | 'ە' => out.push('ه'),
            'ۀ' => out.push_str("ه\u{0654}"),
            '0'..='9' if self.persian_digits => out.push(shift_digit(c, '0')),
            '\u{0660}'..='\u{0669}' if self.persian_digits => out.push(shift_digit(c, '\u{0660}')),
            _ => out.push(c),
        }
    }
}

fn shift_digit(c: char, zero: char) -> char {
    let offset = c as u32 - zero as u32;
    char::from_u32('۰' as u32 + offset).unwrap_or(c)
}

/// Drop ZWNJs that join nothing: repeated, or next to whitespace or the ends.
fn tidy_zwnj(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ZWNJ {
            let prev = out.chars().next_back();
            let next = chars.get(i + 1).copied();
            let joins_prev = prev.is_some_and(|p| !p.is_whitespace() && p != ZWNJ);
            let joins_next = next.is_some_and(|n| !n.is_whitespace() && n != ZWNJ);
            if !(joins_prev && joins_next) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

impl TextNormalizer for PersianNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut refined = String::with_capacity(text.len());
        for c in text.nfkc() {
            self.refine(c, &mut refined);
        }
        let tidy = tidy_zwnj(&refined);
        tidy.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn normalize_term(&self, term: &str) -> String {
        self.normalize(term).to_lowercase()
    }
}
