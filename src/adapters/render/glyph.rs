//! Word rasterization. Turns a word at a pixel size into a coverage mask.

use crate::domain::DomainError;
use ab_glyph::{Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont, point};
use image::GrayImage;

/// Produces the coverage mask of a word laid out on one horizontal line.
/// Mask width is the advance width, height the line height.
pub trait WordRasterizer: Send + Sync {
    /// Mask dimensions `rasterize` would produce, without drawing.
    fn measure(&self, word: &str, size: f32) -> (u32, u32);

    fn rasterize(&self, word: &str, size: f32) -> GrayImage;
}

/// Rasterizer backed by a TrueType/OpenType font.
pub struct FontRasterizer {
    font: FontVec,
}

impl FontRasterizer {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, DomainError> {
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| DomainError::MalformedInput(format!("font: {}", e)))?;
        Ok(Self { font })
    }

    /// Positioned glyphs on one line plus the resulting mask dimensions.
    fn line(&self, word: &str, size: f32) -> (Vec<Glyph>, u32, u32) {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);

        let mut caret = 0.0f32;
        let mut prev: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(word.len());
        for c in word.chars() {
            let id = scaled.glyph_id(c);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, scaled.ascent())));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }

        let width = caret.ceil().max(1.0) as u32;
        let height = scaled.height().ceil().max(1.0) as u32;
        (glyphs, width, height)
    }
}

impl WordRasterizer for FontRasterizer {
    fn measure(&self, word: &str, size: f32) -> (u32, u32) {
        let (_, width, height) = self.line(word, size);
        (width, height)
    }

    fn rasterize(&self, word: &str, size: f32) -> GrayImage {
        let (glyphs, width, height) = self.line(word, size);
        let mut mask = GrayImage::new(width, height);

        for glyph in glyphs {
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                    return;
                }
                let v = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                let px = mask.get_pixel_mut(x as u32, y as u32);
                px.0[0] = px.0[0].max(v);
            });
        }
        mask
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_font_bytes() {
        let err = FontRasterizer::from_bytes(b"definitely not a font".to_vec())
            .err()
            .unwrap();
        assert!(matches!(err, DomainError::MalformedInput(_)));
    }

    #[test]
    fn test_box_rasterizer_dimensions() {
        let mask = test_support::BoxRasterizer.rasterize("abc", 10.0);
        assert_eq!(mask.dimensions(), (18, 10));
        assert_eq!(test_support::BoxRasterizer.measure("abc", 10.0), (18, 10));
    }
}
