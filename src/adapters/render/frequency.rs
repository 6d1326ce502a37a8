//! Word counting for the layout stage.

use std::collections::HashMap;

/// Count words in the shaped corpus.
///
/// Words are whitespace separated; a word needs `min_word_length` chars and
/// at least one alphanumeric char. Case variants are merged under their most
/// frequent surface form. Sorted by count descending, ties by word.
pub fn word_frequencies(text: &str, min_word_length: usize) -> Vec<(String, usize)> {
    let mut groups: HashMap<String, HashMap<&str, usize>> = HashMap::new();
    for word in text.split_whitespace() {
        if word.chars().count() < min_word_length || !word.chars().any(char::is_alphanumeric) {
            continue;
        }
        *groups
            .entry(word.to_lowercase())
            .or_default()
            .entry(word)
            .or_default() += 1;
    }

    let mut out: Vec<(String, usize)> = groups
        .into_values()
        .filter_map(|forms| {
            let total: usize = forms.values().sum();
            forms
                .into_iter()
                .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
                .map(|(surface, _)| (surface.to_string(), total))
        })
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sorted() {
        let f = word_frequencies(" b a  b c b a ", 1);
        assert_eq!(
            f,
            vec![("b".to_string(), 3), ("a".to_string(), 2), ("c".to_string(), 1)]
        );
    }

    #[test]
    fn test_min_length_and_symbols() {
        let f = word_frequencies("a ab -- ۱۲ ..", 2);
        assert_eq!(f, vec![("ab".to_string(), 1), ("۱۲".to_string(), 1)]);
    }

    #[test]
    fn test_case_variants_merged() {
        let f = word_frequencies("Rust rust Rust RUST", 2);
        assert_eq!(f, vec![("Rust".to_string(), 4)]);
    }

    #[test]
    fn test_empty() {
        assert!(word_frequencies("", 2).is_empty());
        assert!(word_frequencies("   ", 2).is_empty());
    }
}
