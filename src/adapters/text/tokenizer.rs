//! Implements Tokenizer with Unicode word boundaries (UAX #29).

use crate::ports::Tokenizer;
use unicode_segmentation::UnicodeSegmentation;

/// Word tokenizer. Punctuation, symbols and whitespace never form tokens;
/// a zero-width non-joiner stays inside the word it joins.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_word_boundaries_not_whitespace() {
        let t = UnicodeWordTokenizer::new();
        assert_eq!(t.tokenize("hello, world!"), vec!["hello", "world"]);
        assert_eq!(t.tokenize("(link)text"), vec!["link", "text"]);
    }

    #[test]
    fn test_persian_words() {
        let t = UnicodeWordTokenizer::new();
        assert_eq!(t.tokenize("سلام، دوستان!"), vec!["سلام", "دوستان"]);
        assert_eq!(t.tokenize("من می\u{200C}روم"), vec!["من", "می\u{200C}روم"]);
    }

    #[test]
    fn test_empty_and_symbol_only() {
        let t = UnicodeWordTokenizer::new();
        assert!(t.tokenize("").is_empty());
        assert!(t.tokenize("  ... !!! ").is_empty());
    }
}
