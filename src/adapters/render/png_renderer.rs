//! Implements Renderer. Counts words, lays them out and writes a PNG.
//!
//! The image is encoded in memory and written with temp-file + rename, so a
//! failed run never leaves a partial `wordcloud.png` behind.

use super::frequency::word_frequencies;
use super::glyph::{FontRasterizer, WordRasterizer};
use super::layout::{PlacedWord, layout};
use super::options::RenderOptions;
use crate::domain::{DomainError, RenderReport};
use crate::ports::Renderer;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Word-cloud renderer over any rasterizer; production uses a font file.
pub struct WordCloudRenderer<R = FontRasterizer> {
    rasterizer: R,
    options: RenderOptions,
}

impl WordCloudRenderer<FontRasterizer> {
    /// Read the font at `font_path`. Missing file -> `MissingResource`,
    /// unparseable font -> `MalformedInput`.
    pub async fn load(font_path: &Path, options: RenderOptions) -> Result<Self, DomainError> {
        let bytes = fs::read(font_path)
            .await
            .map_err(|e| DomainError::from_read("font", font_path, e))?;
        let rasterizer = FontRasterizer::from_bytes(bytes)?;
        info!(path = %font_path.display(), "font loaded");
        Ok(Self::with_rasterizer(rasterizer, options))
    }
}

impl<R: WordRasterizer> WordCloudRenderer<R> {
    pub fn with_rasterizer(rasterizer: R, options: RenderOptions) -> Self {
        Self {
            rasterizer,
            options,
        }
    }

    /// Lay out and paint `text` without touching the filesystem.
    pub fn draw(&self, text: &str) -> (RgbImage, RenderReport) {
        let frequencies = word_frequencies(text, self.options.min_word_length);
        debug!(distinct = frequencies.len(), "word frequencies computed");
        let placed = layout(&frequencies, &self.options, &self.rasterizer);
        let image = paint(&placed, &self.options);
        let report = RenderReport {
            distinct_words: frequencies.len(),
            placed_words: placed.len(),
        };
        (image, report)
    }
}

/// Alpha-blend every placed mask in its color over the background.
fn paint(placed: &[PlacedWord], opts: &RenderOptions) -> RgbImage {
    let bg = opts.background;
    let mut img = RgbImage::from_pixel(opts.width, opts.height, Rgb([bg.r, bg.g, bg.b]));
    for word in placed {
        let fg = [word.color.r, word.color.g, word.color.b];
        for (mx, my, px) in word.mask.enumerate_pixels() {
            let alpha = px.0[0];
            let (x, y) = (word.x + mx, word.y + my);
            if alpha == 0 || x >= opts.width || y >= opts.height {
                continue;
            }
            let dst = img.get_pixel_mut(x, y);
            for (d, f) in dst.0.iter_mut().zip(fg) {
                *d = blend(*d, f, alpha);
            }
        }
    }
    img
}

fn blend(under: u8, over: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((over as u32 * a + under as u32 * (255 - a) + 127) / 255) as u8
}

fn encode_png(img: &RgbImage) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| DomainError::Render(format!("encode png: {}", e)))?;
    Ok(buf)
}

/// Write-replace: temp file, sync, rename over the target. The temp file is
/// removed again when any step fails.
async fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<(), DomainError> {
    let temp_path = dest.with_extension("png.tmp");
    let result = write_then_rename(&temp_path, dest, bytes).await;
    if result.is_err() {
        if let Err(e) = fs::remove_file(&temp_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %temp_path.display(), error = %e, "failed to remove temp file");
            }
        }
    }
    result
}

async fn write_then_rename(
    temp_path: &Path,
    dest: &Path,
    bytes: &[u8],
) -> Result<(), DomainError> {
    let mut f = fs::File::create(temp_path)
        .await
        .map_err(|e| DomainError::Io(format!("create temp file: {}", e)))?;
    f.write_all(bytes)
        .await
        .map_err(|e| DomainError::Io(format!("write temp file: {}", e)))?;
    f.sync_all()
        .await
        .map_err(|e| DomainError::Io(format!("sync temp file: {}", e)))?;
    drop(f);

    fs::rename(temp_path, dest)
        .await
        .map_err(|e| DomainError::Io(format!("atomic rename failed: {}", e)))?;
    Ok(())
}

#[async_trait::async_trait]
impl<R: WordRasterizer> Renderer for WordCloudRenderer<R> {
    async fn render(&self, text: &str, dest: &Path) -> Result<RenderReport, DomainError> {
        let (image, report) = self.draw(text);
        let bytes = encode_png(&image)?;
        write_atomic(dest, &bytes).await?;
        info!(
            path = %dest.display(),
            distinct_words = report.distinct_words,
            placed_words = report.placed_words,
            "word cloud written"
        );
        Ok(report)
    }
}
