//! Implements ExportSource. Reads a Telegram JSON export in one go.

use crate::domain::{ChatExport, DomainError};
use crate::ports::ExportSource;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Loads `result.json`-style exports from the filesystem.
#[derive(Debug, Default)]
pub struct JsonExportSource;

impl JsonExportSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ExportSource for JsonExportSource {
    async fn load_export(&self, path: &Path) -> Result<ChatExport, DomainError> {
        info!(path = %path.display(), "loading chat export");
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::from_read("chat export", path, e))?;
        let export: ChatExport = serde_json::from_str(&raw).map_err(|e| {
            DomainError::MalformedInput(format!("chat export {}: {}", path.display(), e))
        })?;
        info!(
            chat = export.name.as_deref().unwrap_or("<unnamed>"),
            messages = export.messages.len(),
            "chat export loaded"
        );
        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageText;

    #[tokio::test]
    async fn test_load_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(
            &path,
            r#"{"name": "Group", "type": "private_group", "id": 1,
                "messages": [{"id": 1, "type": "message", "text": "سلام"}]}"#,
        )
        .unwrap();

        let export = JsonExportSource::new().load_export(&path).await.unwrap();
        assert_eq!(export.messages.len(), 1);
        assert_eq!(
            export.messages[0].text,
            Some(MessageText::Plain("سلام".to_string()))
        );
    }

    #[tokio::test]
    async fn test_odd_metadata_does_not_fail_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(
            &path,
            r#"{"id": "chat-7", "messages": [
                {"id": "x1", "text": "hello"},
                {"id": 2, "from": {"name": "a"}, "text": ["world"]}]}"#,
        )
        .unwrap();

        let export = JsonExportSource::new().load_export(&path).await.unwrap();
        assert_eq!(export.messages.len(), 2);
        assert_eq!(export.messages[0].id, None);
        assert_eq!(export.messages[1].id, Some(2));
        assert_eq!(export.messages[1].from, None);
        assert_eq!(export.messages[1].segments(), vec!["world"]);
    }

    #[tokio::test]
    async fn test_missing_export_is_missing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonExportSource::new()
            .load_export(&dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingResource { what: "chat export", .. }));
    }

    #[tokio::test]
    async fn test_malformed_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"messages": "#).unwrap();
        let err = JsonExportSource::new().load_export(&path).await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedInput(_)));

        std::fs::write(&path, r#"{"chats": []}"#).unwrap();
        let err = JsonExportSource::new().load_export(&path).await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedInput(_)));
    }
}
