//! Flatten messages into one filtered corpus.
//!
//! Each text piece of a message (the whole body, or every recognized entry of
//! a rich body) is tokenized, stop-words are dropped, and the survivors are
//! appended to the corpus as one space-prefixed contribution.

use crate::domain::{ChatExport, Corpus, Message, StopWordSet};
use crate::ports::{TextNormalizer, Tokenizer};
use std::sync::Arc;
use tracing::{debug, info};

/// Normalize raw stop-word terms with the same key used for tokens.
pub fn build_stop_words(terms: &[String], normalizer: &dyn TextNormalizer) -> StopWordSet {
    StopWordSet::from_normalized(terms.iter().map(|t| normalizer.normalize_term(t)))
}

/// Counters for one flatten pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlattenStats {
    pub messages: usize,
    /// Messages whose text was absent or of an unrecognized shape.
    pub messages_without_text: usize,
    pub tokens_kept: usize,
    pub tokens_dropped: usize,
}

pub struct Flattener {
    tokenizer: Arc<dyn Tokenizer>,
    normalizer: Arc<dyn TextNormalizer>,
    stop_words: StopWordSet,
}

impl Flattener {
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        normalizer: Arc<dyn TextNormalizer>,
        stop_words: StopWordSet,
    ) -> Self {
        Self {
            tokenizer,
            normalizer,
            stop_words,
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&self.normalizer.normalize_term(token))
    }

    /// Tokens of `text` that are not stop-words, in order, with the number
    /// of tokens dropped.
    fn filter_segment(&self, text: &str) -> (Vec<String>, usize) {
        let tokens = self.tokenizer.tokenize(text);
        let total = tokens.len();
        let kept: Vec<String> = tokens
            .into_iter()
            .filter(|token| !self.is_stop_word(token))
            .collect();
        let dropped = total - kept.len();
        (kept, dropped)
    }

    /// Tokens of `text` that are not stop-words, in order.
    pub fn filter_tokens(&self, text: &str) -> Vec<String> {
        self.filter_segment(text).0
    }

    /// One filtered token list per text piece of `message`. Empty when the
    /// message has no recognizable text.
    pub fn message_contributions(&self, message: &Message) -> Vec<Vec<String>> {
        self.counted_contributions(message)
            .into_iter()
            .map(|(kept, _)| kept)
            .collect()
    }

    fn counted_contributions(&self, message: &Message) -> Vec<(Vec<String>, usize)> {
        message
            .segments()
            .into_iter()
            .map(|segment| self.filter_segment(segment))
            .collect()
    }

    pub fn flatten(&self, export: &ChatExport) -> (Corpus, FlattenStats) {
        let mut corpus = Corpus::new();
        let mut stats = FlattenStats {
            messages: export.messages.len(),
            ..Default::default()
        };

        for message in &export.messages {
            let contributions = self.counted_contributions(message);
            if contributions.is_empty() {
                stats.messages_without_text += 1;
                debug!(id = ?message.id, kind = ?message.kind, "message has no usable text");
                continue;
            }
            for (kept, dropped) in contributions {
                stats.tokens_dropped += dropped;
                stats.tokens_kept += kept.len();
                corpus.push_contribution(&kept);
            }
        }

        info!(
            messages = stats.messages,
            without_text = stats.messages_without_text,
            kept = stats.tokens_kept,
            dropped = stats.tokens_dropped,
            "corpus built"
        );
        (corpus, stats)
    }
}
