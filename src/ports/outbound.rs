//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatExport, DomainError, RenderReport};
use std::path::Path;

/// Reads a chat export from disk.
#[async_trait::async_trait]
pub trait ExportSource: Send + Sync {
    /// Parse the export at `path`. Missing file -> `MissingResource`,
    /// unparseable content -> `MalformedInput`.
    async fn load_export(&self, path: &Path) -> Result<ChatExport, DomainError>;
}

/// Reads a newline-delimited stop-word list.
#[async_trait::async_trait]
pub trait StopWordSource: Send + Sync {
    /// Returns trimmed, non-empty terms in file order. Not normalized.
    async fn load_stop_words(&self, path: &Path) -> Result<Vec<String>, DomainError>;
}

/// Splits text into word tokens on linguistic boundaries.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Orthographic canonicalization for the target language.
pub trait TextNormalizer: Send + Sync {
    /// Canonical form used for the corpus.
    fn normalize(&self, text: &str) -> String;

    /// Comparison key for stop-word matching. Must be applied identically to
    /// stop-words and tokens.
    fn normalize_term(&self, term: &str) -> String;
}

/// Contextual letter shaping and visual (bidi) reordering.
pub trait Shaper: Send + Sync {
    fn shape(&self, text: &str) -> String;
}

/// Word-cloud renderer. Writes one image at `dest` or nothing at all.
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, text: &str, dest: &Path) -> Result<RenderReport, DomainError>;
}

/// Operator-facing stage indicator (spinner, status line).
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage started.
    fn stage(&self, message: &str);

    /// The pipeline finished; `message` is the final status.
    fn finish(&self, message: &str);
}
