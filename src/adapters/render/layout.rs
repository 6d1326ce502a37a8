//! Word-cloud layout.
//!
//! Words are placed largest first. Each word gets a size from its relative
//! frequency, an orientation, and a uniformly random free spot found through
//! an integral image of the pixels already drawn. When no spot fits, the other
//! orientation is tried once, then the font shrinks by one pixel at a time.
//! Layout stops at the first word that cannot fit at `min_font_size`.

use super::glyph::WordRasterizer;
use super::options::{Color, RenderOptions};
use image::GrayImage;
use image::imageops::rotate270;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A word with its final size, position, color and coverage mask.
#[derive(Debug, Clone)]
pub struct PlacedWord {
    pub word: String,
    pub font_size: u32,
    pub x: u32,
    pub y: u32,
    pub vertical: bool,
    pub color: Color,
    pub mask: GrayImage,
}

/// Drawn-pixel occupancy with a summed-area table for O(1) box queries.
struct OccupancyMap {
    width: u32,
    height: u32,
    occupied: Vec<bool>,
    /// `(height + 1) x (width + 1)`; entry (r, c) counts occupied pixels above
    /// row r and left of column c.
    integral: Vec<u32>,
}

impl OccupancyMap {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            occupied: vec![false; width as usize * height as usize],
            integral: vec![0; (width as usize + 1) * (height as usize + 1)],
        }
    }

    fn stride(&self) -> usize {
        self.width as usize + 1
    }

    fn box_sum(&self, x: u32, y: u32, w: u32, h: u32) -> u32 {
        let s = self.stride();
        let (x0, y0, x1, y1) = (x as usize, y as usize, (x + w) as usize, (y + h) as usize);
        self.integral[y1 * s + x1] + self.integral[y0 * s + x0]
            - self.integral[y0 * s + x1]
            - self.integral[y1 * s + x0]
    }

    /// Top-left corner of a random free `w x h` box, if any exists.
    fn sample_position(&self, w: u32, h: u32, rng: &mut StdRng) -> Option<(u32, u32)> {
        if w > self.width || h > self.height {
            return None;
        }
        let free = |x: u32, y: u32| self.box_sum(x, y, w, h) == 0;
        let (max_x, max_y) = (self.width - w, self.height - h);

        let mut hits = 0u64;
        for y in 0..=max_y {
            for x in 0..=max_x {
                if free(x, y) {
                    hits += 1;
                }
            }
        }
        if hits == 0 {
            return None;
        }

        let mut target = rng.random_range(0..hits);
        for y in 0..=max_y {
            for x in 0..=max_x {
                if free(x, y) {
                    if target == 0 {
                        return Some((x, y));
                    }
                    target -= 1;
                }
            }
        }
        None
    }

    /// Mark every covered pixel of `mask` drawn at `(x, y)`.
    fn mark(&mut self, mask: &GrayImage, x: u32, y: u32) {
        for (mx, my, px) in mask.enumerate_pixels() {
            let (cx, cy) = (x + mx, y + my);
            if px.0[0] > 0 && cx < self.width && cy < self.height {
                self.occupied[cy as usize * self.width as usize + cx as usize] = true;
            }
        }
        self.rebuild_from_row(y);
    }

    fn rebuild_from_row(&mut self, from_row: u32) {
        let s = self.stride();
        for r in (from_row as usize)..(self.height as usize) {
            let mut row_sum = 0u32;
            for c in 0..(self.width as usize) {
                if self.occupied[r * self.width as usize + c] {
                    row_sum += 1;
                }
                self.integral[(r + 1) * s + c + 1] = self.integral[r * s + c + 1] + row_sum;
            }
        }
    }
}

fn rasterize_oriented<R>(rasterizer: &R, word: &str, size: u32, vertical: bool) -> GrayImage
where
    R: WordRasterizer + ?Sized,
{
    let mask = rasterizer.rasterize(word, size as f32);
    if vertical { rotate270(&mask) } else { mask }
}

/// Whether a `word` box plus margin can fit the empty canvas at all.
fn fits_canvas<R>(
    rasterizer: &R,
    word: &str,
    size: u32,
    vertical: bool,
    opts: &RenderOptions,
) -> bool
where
    R: WordRasterizer + ?Sized,
{
    let (w, h) = rasterizer.measure(word, size as f32);
    let (w, h) = if vertical { (h, w) } else { (w, h) };
    w.saturating_add(opts.margin) <= opts.width && h.saturating_add(opts.margin) <= opts.height
}

/// Lay out `frequencies` (sorted by count, descending) on the canvas.
/// Only the first `max_words` entries are considered.
pub fn layout<R>(
    frequencies: &[(String, usize)],
    opts: &RenderOptions,
    rasterizer: &R,
) -> Vec<PlacedWord>
where
    R: WordRasterizer + ?Sized,
{
    let mut placed = Vec::new();
    let Some(&(_, max_count)) = frequencies.first() else {
        return placed;
    };
    if max_count == 0 {
        return placed;
    }

    let mut rng = StdRng::seed_from_u64(opts.random_seed);
    let mut occupancy = OccupancyMap::new(opts.width, opts.height);
    let rs = opts.relative_scaling;
    let mut font_size = opts.max_font_size;
    let mut last_freq = 1.0f64;

    for (word, count) in frequencies.iter().take(opts.max_words) {
        if *count == 0 {
            continue;
        }
        let freq = *count as f64 / max_count as f64;
        if rs != 0.0 {
            font_size = ((rs * (freq / last_freq) + (1.0 - rs)) * font_size as f64).round() as u32;
        }

        let mut vertical = rng.random::<f64>() >= opts.prefer_horizontal;
        let mut tried_other_orientation = false;
        let found = loop {
            if font_size < opts.min_font_size {
                break None;
            }
            if fits_canvas(rasterizer, word, font_size, vertical, opts) {
                let mask = rasterize_oriented(rasterizer, word, font_size, vertical);
                let (w, h) = mask.dimensions();
                if let Some(pos) =
                    occupancy.sample_position(w + opts.margin, h + opts.margin, &mut rng)
                {
                    break Some((pos, mask));
                }
            }
            if !tried_other_orientation && opts.prefer_horizontal < 1.0 {
                vertical = !vertical;
                tried_other_orientation = true;
            } else {
                font_size -= 1;
                vertical = false;
            }
        };

        let Some(((px, py), mask)) = found else {
            break;
        };
        let x = px + opts.margin / 2;
        let y = py + opts.margin / 2;
        occupancy.mark(&mask, x, y);

        let hue = rng.random_range(0..=255u32) as f64;
        placed.push(PlacedWord {
            word: word.clone(),
            font_size,
            x,
            y,
            vertical,
            color: Color::from_hsl(hue, 0.8, 0.5),
            mask,
        });
        last_freq = freq;
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::super::glyph::test_support::BoxRasterizer;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn opts(width: u32, height: u32, max_font_size: u32) -> RenderOptions {
        RenderOptions {
            width,
            height,
            max_font_size,
            prefer_horizontal: 1.0,
            ..Default::default()
        }
    }

    fn freqs(items: &[(&str, usize)]) -> Vec<(String, usize)> {
        items.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_empty_frequencies_place_nothing() {
        assert!(layout(&[], &opts(100, 100, 50), &BoxRasterizer).is_empty());
    }

    #[test]
    fn test_word_shrinks_to_fit_canvas() {
        let placed = layout(&freqs(&[("ab", 1)]), &opts(200, 100, 250), &BoxRasterizer);
        assert_eq!(placed.len(), 1);
        // 98px tall plus 2px margin is the largest box fitting 100px.
        assert_eq!(placed[0].font_size, 98);
        assert!(!placed[0].vertical);
        assert_eq!(placed[0].y, 1);
    }

    #[test]
    fn test_relative_scaling() {
        let placed = layout(
            &freqs(&[("ab", 4), ("cd", 1)]),
            &opts(1000, 1000, 80),
            &BoxRasterizer,
        );
        let sizes: Vec<u32> = placed.iter().map(|p| p.font_size).collect();
        // (0.5 * 1/4 + 0.5) * 80
        assert_eq!(sizes, vec![80, 50]);
    }

    #[test]
    fn test_no_overlap_and_in_bounds() {
        let words = freqs(&[
            ("alpha", 9),
            ("beta", 7),
            ("gamma", 5),
            ("delta", 4),
            ("epsilon", 3),
            ("zeta", 2),
            ("eta", 1),
        ]);
        let o = RenderOptions {
            prefer_horizontal: 0.5,
            ..opts(300, 300, 60)
        };
        let placed = layout(&words, &o, &BoxRasterizer);
        assert!(!placed.is_empty());

        let mut grid = vec![0u8; 300 * 300];
        for p in &placed {
            let (w, h) = p.mask.dimensions();
            assert!(p.x + w <= 300 && p.y + h <= 300, "{} out of bounds", p.word);
            for my in 0..h {
                for mx in 0..w {
                    let cell = &mut grid[((p.y + my) * 300 + p.x + mx) as usize];
                    *cell += 1;
                    assert!(*cell <= 1, "{} overlaps", p.word);
                }
            }
        }
    }

    #[test]
    fn test_layout_is_deterministic_for_seed() {
        let words = freqs(&[("one", 5), ("two", 3), ("three", 2), ("four", 1)]);
        let o = RenderOptions {
            prefer_horizontal: 0.5,
            ..opts(400, 400, 80)
        };
        let a = layout(&words, &o, &BoxRasterizer);
        let b = layout(&words, &o, &BoxRasterizer);
        let key = |p: &PlacedWord| (p.word.clone(), p.x, p.y, p.font_size, p.vertical, p.color);
        assert_eq!(
            a.iter().map(key).collect::<Vec<_>>(),
            b.iter().map(key).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_vertical_mask_is_rotated() {
        let o = RenderOptions {
            prefer_horizontal: 0.0,
            ..opts(500, 500, 40)
        };
        let placed = layout(&freqs(&[("abcd", 1)]), &o, &BoxRasterizer);
        assert!(placed[0].vertical);
        // 4 chars * 40 * 0.6 = 96 wide before rotation.
        assert_eq!(placed[0].mask.dimensions(), (40, 96));
    }

    #[test]
    fn test_stops_below_min_font_size() {
        let placed = layout(&freqs(&[("ab", 2), ("cd", 1)]), &opts(5, 5, 50), &BoxRasterizer);
        assert!(placed.is_empty());
    }

    /// Counts full rasterizations.
    struct CountingRasterizer {
        calls: AtomicUsize,
    }

    impl WordRasterizer for CountingRasterizer {
        fn measure(&self, word: &str, size: f32) -> (u32, u32) {
            BoxRasterizer.measure(word, size)
        }

        fn rasterize(&self, word: &str, size: f32) -> GrayImage {
            self.calls.fetch_add(1, Ordering::SeqCst);
            BoxRasterizer.rasterize(word, size)
        }
    }

    #[test]
    fn test_oversized_sizes_are_not_rasterized() {
        let counting = CountingRasterizer {
            calls: AtomicUsize::new(0),
        };
        // 10 chars -> 6px per font px; 16 is the largest size fitting 100px.
        let placed = layout(&freqs(&[("abcdefghij", 1)]), &opts(100, 100, 250), &counting);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].font_size, 16);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_max_words_caps_candidates() {
        let o = RenderOptions {
            max_words: 2,
            relative_scaling: 0.0,
            ..opts(1000, 1000, 20)
        };
        let placed = layout(&freqs(&[("aa", 3), ("bb", 2), ("cc", 1)]), &o, &BoxRasterizer);
        assert_eq!(placed.len(), 2);
    }
}
