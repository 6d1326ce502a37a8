//! Wiring & DI. Entry point: parse arguments, bootstrap adapters, run the pipeline.
//! No business logic here; the pipeline lives in WordCloudService.

use anyhow::Context;
use chat_wordcloud::adapters::persistence::{FileStopWordSource, JsonExportSource};
use chat_wordcloud::adapters::render::WordCloudRenderer;
use chat_wordcloud::adapters::text::{ArabicShaper, PersianNormalizer, UnicodeWordTokenizer};
use chat_wordcloud::adapters::ui::SpinnerProgress;
use chat_wordcloud::ports::{
    ExportSource, ProgressReporter, Renderer, Shaper, StopWordSource, TextNormalizer, Tokenizer,
};
use chat_wordcloud::shared::config::AppConfig;
use chat_wordcloud::usecases::WordCloudService;
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Render a word cloud from a Telegram chat export.
#[derive(Debug, Parser)]
#[command(
    name = "chat-wordcloud",
    version,
    about,
    after_help = "Needs a TrueType/OpenType font, which is not bundled. Default location: \
                  ./data/IRANSans.ttf; override with WORDCLOUD_FONT_PATH or WORDCLOUD_DATA_DIR."
)]
struct Cli {
    /// Telegram export JSON (`result.json`)
    export: PathBuf,
    /// Directory that receives `wordcloud.png`
    output_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().context("load configuration")?;
    let options = cfg.render_options()?;
    let stopwords_path = cfg.stopwords_path_or_default();
    let font_path = cfg.font_path_or_default();
    info!(
        stopwords = %stopwords_path.display(),
        font = %font_path.display(),
        width = options.width,
        height = options.height,
        max_font_size = options.max_font_size,
        "configuration resolved"
    );

    // --- Adapters ---
    let renderer: Arc<dyn Renderer> =
        Arc::new(
            WordCloudRenderer::load(&font_path, options)
                .await
                .with_context(|| AppConfig::font_help(&font_path))?,
        );
    let exports: Arc<dyn ExportSource> = Arc::new(JsonExportSource::new());
    let stop_words: Arc<dyn StopWordSource> = Arc::new(FileStopWordSource::new());
    let tokenizer: Arc<dyn Tokenizer> = Arc::new(UnicodeWordTokenizer::new());
    let normalizer: Arc<dyn TextNormalizer> = Arc::new(PersianNormalizer::new());
    let shaper: Arc<dyn Shaper> = Arc::new(ArabicShaper::new());
    let progress: Arc<dyn ProgressReporter> = Arc::new(SpinnerProgress::new());

    // --- Pipeline ---
    let service = WordCloudService::new(
        exports,
        stop_words,
        tokenizer,
        normalizer,
        shaper,
        renderer,
        progress,
        stopwords_path,
    );
    let summary = service.generate(&cli.export, &cli.output_dir).await?;

    info!(
        path = %summary.output_path.display(),
        messages = summary.flatten.messages,
        tokens = summary.flatten.tokens_kept,
        words_placed = summary.render.placed_words,
        "done"
    );
    Ok(())
}
