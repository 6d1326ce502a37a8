//! Domain entities. Pure data structures for the core business.
//!
//! The export types mirror the Telegram "Export chat history" JSON layout; only
//! the fields the pipeline looks at are modelled, everything else is ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Metadata that is only logged: a value of the wrong shape reads as `None`
/// instead of failing the whole export.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A Telegram chat export (`result.json`). Read once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExport {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    pub messages: Vec<Message>,
}

/// A single exported message.
///
/// `text` is absent for some service records; `None` and any unrecognized
/// shape contribute nothing to the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub from: Option<String>,
    #[serde(default)]
    pub text: Option<MessageText>,
}

/// Polymorphic message body: a plain string, or a list mixing plain strings
/// and formatted spans (links, mentions, bold, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageText {
    Plain(String),
    Rich(Vec<TextEntry>),
    Unrecognized(serde_json::Value),
}

/// One element of a rich message body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextEntry {
    Plain(String),
    Span(TextSpan),
    Unrecognized(serde_json::Value),
}

/// Formatted sub-text. `kind` is e.g. `link`, `mention`, `bold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Message {
    /// Text pieces in order: the whole body for plain text, one piece per
    /// recognized entry for rich text, nothing otherwise.
    pub fn segments(&self) -> Vec<&str> {
        match &self.text {
            Some(MessageText::Plain(s)) => vec![s.as_str()],
            Some(MessageText::Rich(entries)) => entries
                .iter()
                .filter_map(|entry| match entry {
                    TextEntry::Plain(s) => Some(s.as_str()),
                    TextEntry::Span(span) => Some(span.text.as_str()),
                    TextEntry::Unrecognized(_) => None,
                })
                .collect(),
            Some(MessageText::Unrecognized(_)) | None => Vec::new(),
        }
    }
}

/// Stop-words, already normalized. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    terms: HashSet<String>,
}

impl StopWordSet {
    /// Build from terms that have already gone through `normalize_term`.
    pub fn from_normalized<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            terms: terms.into_iter().filter(|t| !t.is_empty()).collect(),
        }
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.terms.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Accumulated filtered tokens of the whole export.
///
/// Every contribution is prefixed with one space, even an empty one, so the
/// raw corpus is never trimmed between messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_contribution(&mut self, tokens: &[String]) {
        self.text.push(' ');
        self.text.push_str(&tokens.join(" "));
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Outcome of a render: how many distinct words were candidates and how many
/// made it onto the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub distinct_words: usize,
    pub placed_words: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(json: &str) -> Message {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_plain_text_is_single_segment() {
        let m = message(r#"{"id": 1, "type": "message", "text": "hello world"}"#);
        assert_eq!(m.segments(), vec!["hello world"]);
    }

    #[test]
    fn test_rich_text_keeps_entry_order() {
        let m = message(
            r#"{"text": [{"type": "link", "text": "link text"}, "plain", {"type": "bold", "text": "b"}]}"#,
        );
        assert_eq!(m.segments(), vec!["link text", "plain", "b"]);
    }

    #[test]
    fn test_rich_text_skips_unknown_entries() {
        let m = message(r#"{"text": [7, {"type": "custom_emoji"}, {"text": 3}, "ok", null]}"#);
        assert_eq!(m.segments(), vec!["ok"]);
    }

    #[test]
    fn test_unrecognized_or_missing_text() {
        assert!(message(r#"{"text": 42}"#).segments().is_empty());
        assert!(message(r#"{"text": {"a": 1}}"#).segments().is_empty());
        assert!(message(r#"{"id": 5, "type": "service"}"#).segments().is_empty());
        assert!(message(r#"{"text": null}"#).segments().is_empty());
    }

    #[test]
    fn test_odd_metadata_shapes_are_ignored() {
        let m = message(r#"{"id": "x1", "type": 3, "from": {"name": "a"}, "text": "hello"}"#);
        assert_eq!(m.id, None);
        assert_eq!(m.kind, None);
        assert_eq!(m.from, None);
        assert_eq!(m.segments(), vec!["hello"]);

        let export: ChatExport =
            serde_json::from_str(r#"{"name": ["x"], "id": "abc", "messages": []}"#).unwrap();
        assert_eq!(export.name, None);
        assert_eq!(export.id, None);
    }

    #[test]
    fn test_export_requires_messages() {
        assert!(serde_json::from_str::<ChatExport>(r#"{"name": "x"}"#).is_err());
        let export: ChatExport =
            serde_json::from_str(r#"{"name": "x", "type": "personal_chat", "id": 9, "messages": []}"#)
                .unwrap();
        assert_eq!(export.name.as_deref(), Some("x"));
        assert!(export.messages.is_empty());
    }

    #[test]
    fn test_corpus_prefixes_every_contribution() {
        let mut corpus = Corpus::new();
        corpus.push_contribution(&["a".to_string(), "b".to_string()]);
        corpus.push_contribution(&[]);
        corpus.push_contribution(&["c".to_string()]);
        assert_eq!(corpus.as_str(), " a b  c");
    }

    #[test]
    fn test_stop_word_set_ignores_empty_terms() {
        let set = StopWordSet::from_normalized(vec!["".to_string(), "و".to_string()]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("و"));
        assert!(!set.contains(""));
    }
}
