//! Word-cloud pipeline: load -> flatten/filter -> normalize/shape -> render.
//!
//! Strictly sequential; the first failing stage aborts the run and nothing is
//! written to the output directory.

use super::flatten::{FlattenStats, Flattener, build_stop_words};
use crate::domain::{DomainError, RenderReport};
use crate::ports::{
    ExportSource, ProgressReporter, Renderer, Shaper, StopWordSource, TextNormalizer, Tokenizer,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::info;

/// File name of the rendered image inside the output directory.
pub const OUTPUT_FILE_NAME: &str = "wordcloud.png";

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct WordCloudSummary {
    pub output_path: PathBuf,
    pub flatten: FlattenStats,
    pub render: RenderReport,
}

pub struct WordCloudService {
    exports: Arc<dyn ExportSource>,
    stop_words: Arc<dyn StopWordSource>,
    tokenizer: Arc<dyn Tokenizer>,
    normalizer: Arc<dyn TextNormalizer>,
    shaper: Arc<dyn Shaper>,
    renderer: Arc<dyn Renderer>,
    progress: Arc<dyn ProgressReporter>,
    stopwords_path: PathBuf,
}

impl WordCloudService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        exports: Arc<dyn ExportSource>,
        stop_words: Arc<dyn StopWordSource>,
        tokenizer: Arc<dyn Tokenizer>,
        normalizer: Arc<dyn TextNormalizer>,
        shaper: Arc<dyn Shaper>,
        renderer: Arc<dyn Renderer>,
        progress: Arc<dyn ProgressReporter>,
        stopwords_path: PathBuf,
    ) -> Self {
        Self {
            exports,
            stop_words,
            tokenizer,
            normalizer,
            shaper,
            renderer,
            progress,
            stopwords_path,
        }
    }

    /// Normalize the raw corpus once, then shape it for display.
    pub fn prepare_text(&self, corpus: &str) -> String {
        let normalized = self.normalizer.normalize(corpus);
        self.shaper.shape(&normalized)
    }

    /// Run the whole pipeline and write `<output_dir>/wordcloud.png`.
    pub async fn generate(
        &self,
        export_path: &Path,
        output_dir: &Path,
    ) -> Result<WordCloudSummary, DomainError> {
        self.progress.stage("Loading chat export and stop-words");
        let export = self.exports.load_export(export_path).await?;
        let terms = self.stop_words.load_stop_words(&self.stopwords_path).await?;
        let stop_set = build_stop_words(&terms, self.normalizer.as_ref());
        info!(stop_words = stop_set.len(), "stop-words normalized");

        self.progress.stage("Extracting tokens");
        let flattener = Flattener::new(
            Arc::clone(&self.tokenizer),
            Arc::clone(&self.normalizer),
            stop_set,
        );
        let (corpus, flatten) = flattener.flatten(&export);

        self.progress.stage("Normalizing and shaping text");
        let text = self.prepare_text(corpus.as_str());
        info!(chars = text.chars().count(), "corpus shaped");

        self.progress.stage("Generating word cloud");
        fs::create_dir_all(output_dir)
            .await
            .map_err(|e| DomainError::Io(format!("create output dir: {}", e)))?;
        let output_path = output_dir.join(OUTPUT_FILE_NAME);
        let render = self.renderer.render(&text, &output_path).await?;

        self.progress
            .finish(&format!("Saved word cloud to {}", output_path.display()));
        Ok(WordCloudSummary {
            output_path,
            flatten,
            render,
        })
    }
}
