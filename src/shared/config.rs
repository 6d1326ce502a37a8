//! Application configuration. Resource paths and renderer settings.
//!
//! Every key is optional. Sources, lowest priority first: `.env`, a config file
//! named by `WORDCLOUD_CONFIG`, then `WORDCLOUD_*` environment variables.

use crate::adapters::render::{Color, RenderOptions};
use crate::domain::DomainError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_STOPWORDS_FILE: &str = "stopwords.txt";
pub const DEFAULT_FONT_FILE: &str = "IRANSans.ttf";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding the stop-word list and font. Read from WORDCLOUD_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Stop-word list; defaults to `<data_dir>/stopwords.txt`. Read from WORDCLOUD_STOPWORDS_PATH.
    #[serde(default)]
    pub stopwords_path: Option<String>,

    /// TrueType/OpenType font; defaults to `<data_dir>/IRANSans.ttf`. WORDCLOUD_FONT_PATH.
    #[serde(default)]
    pub font_path: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Renderer
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub max_font_size: Option<u32>,

    #[serde(default)]
    pub min_font_size: Option<u32>,

    /// Color name (`white`, `black`, ...) or `#rrggbb`.
    #[serde(default)]
    pub background_color: Option<String>,

    #[serde(default)]
    pub max_words: Option<usize>,

    /// Probability in [0, 1] that a word is laid out horizontally.
    #[serde(default)]
    pub prefer_horizontal: Option<f64>,

    /// Weight in [0, 1] of relative frequency on font size.
    #[serde(default)]
    pub relative_scaling: Option<f64>,

    /// Free pixels around every word.
    #[serde(default)]
    pub margin: Option<u32>,

    /// Shorter words are not drawn.
    #[serde(default)]
    pub min_word_length: Option<usize>,

    /// Seed for layout and colors. Same seed and inputs give the same image.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("WORDCLOUD_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("WORDCLOUD"));
        c.build()?.try_deserialize()
    }

    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    pub fn stopwords_path_or_default(&self) -> PathBuf {
        self.stopwords_path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir_or_default().join(DEFAULT_STOPWORDS_FILE))
    }

    pub fn font_path_or_default(&self) -> PathBuf {
        self.font_path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir_or_default().join(DEFAULT_FONT_FILE))
    }

    /// Operator hint for a font that could not be loaded. No font ships with
    /// the binary.
    pub fn font_help(path: &Path) -> String {
        format!(
            "load font {}: no font is bundled; put a TrueType/OpenType font there, \
             or point WORDCLOUD_FONT_PATH (or WORDCLOUD_DATA_DIR) at one",
            path.display()
        )
    }

    /// Build validated renderer settings. Unset keys take the defaults of
    /// `RenderOptions::default()`.
    pub fn render_options(&self) -> Result<RenderOptions, DomainError> {
        let d = RenderOptions::default();
        let background = match self.background_color.as_deref() {
            Some(s) => Color::parse(s)
                .ok_or_else(|| DomainError::Config(format!("unknown background_color: {}", s)))?,
            None => d.background,
        };
        let opts = RenderOptions {
            width: self.width.unwrap_or(d.width),
            height: self.height.unwrap_or(d.height),
            max_font_size: self.max_font_size.unwrap_or(d.max_font_size),
            min_font_size: self.min_font_size.unwrap_or(d.min_font_size),
            background,
            max_words: self.max_words.unwrap_or(d.max_words),
            prefer_horizontal: self.prefer_horizontal.unwrap_or(d.prefer_horizontal),
            relative_scaling: self.relative_scaling.unwrap_or(d.relative_scaling),
            margin: self.margin.unwrap_or(d.margin),
            min_word_length: self.min_word_length.unwrap_or(d.min_word_length),
            random_seed: self.random_seed.unwrap_or(d.random_seed),
        };
        opts.validate()?;
        Ok(opts)
    }
}
