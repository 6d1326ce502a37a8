//! Implements StopWordSource. One term per line, surrounding whitespace trimmed.

use crate::domain::DomainError;
use crate::ports::StopWordSource;
use std::path::Path;
use tokio::fs;
use tracing::info;

#[derive(Debug, Default)]
pub struct FileStopWordSource;

impl FileStopWordSource {
    pub fn new() -> Self {
        Self
    }
}

/// Trimmed, non-empty lines in file order.
pub fn parse_stop_words(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[async_trait::async_trait]
impl StopWordSource for FileStopWordSource {
    async fn load_stop_words(&self, path: &Path) -> Result<Vec<String>, DomainError> {
        info!(path = %path.display(), "loading stop-words");
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::from_read("stop-word list", path, e))?;
        let terms = parse_stop_words(&raw);
        info!(count = terms.len(), "stop-words loaded");
        Ok(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let terms = parse_stop_words("  از \r\nبه\n\n\t\nکه  \n");
        assert_eq!(terms, vec!["از", "به", "که"]);
    }

    #[tokio::test]
    async fn test_missing_list_is_missing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileStopWordSource::new()
            .load_stop_words(&dir.path().join("stopwords.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingResource { what: "stop-word list", .. }));
    }

    #[tokio::test]
    async fn test_non_utf8_list_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = FileStopWordSource::new().load_stop_words(&path).await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedInput(_)));
    }
}
