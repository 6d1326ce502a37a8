//! Renderer settings and colors.

use crate::domain::DomainError;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a basic color name or `#rgb` / `#rrggbb`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        let c = match s.to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "red" => Self::new(255, 0, 0),
            "green" => Self::new(0, 128, 0),
            "blue" => Self::new(0, 0, 255),
            "yellow" => Self::new(255, 255, 0),
            "orange" => Self::new(255, 165, 0),
            "purple" => Self::new(128, 0, 128),
            "navy" => Self::new(0, 0, 128),
            "gray" | "grey" => Self::new(128, 128, 128),
            "silver" => Self::new(192, 192, 192),
            _ => return None,
        };
        Some(c)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Some(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        }
    }

    /// HSL to RGB. `hue` in degrees, `saturation` and `lightness` in [0, 1].
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let h = (hue.rem_euclid(360.0)) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

/// Largest accepted canvas side, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Word-cloud layout and raster settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub max_font_size: u32,
    pub min_font_size: u32,
    pub background: Color,
    pub max_words: usize,
    pub prefer_horizontal: f64,
    pub relative_scaling: f64,
    pub margin: u32,
    pub min_word_length: usize,
    pub random_seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1200,
            max_font_size: 250,
            min_font_size: 4,
            background: Color::WHITE,
            max_words: 200,
            prefer_horizontal: 0.9,
            relative_scaling: 0.5,
            margin: 2,
            min_word_length: 2,
            random_seed: 42,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.width == 0 || self.height == 0 {
            return Err(DomainError::Config(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(DomainError::Config(format!(
                "image size {}x{} exceeds the {} px limit",
                self.width, self.height, MAX_DIMENSION
            )));
        }
        if self.min_font_size == 0 || self.max_font_size < self.min_font_size {
            return Err(DomainError::Config(format!(
                "font sizes must satisfy 0 < min ({}) <= max ({})",
                self.min_font_size, self.max_font_size
            )));
        }
        if self.max_words == 0 {
            return Err(DomainError::Config("max_words must be positive".into()));
        }
        for (name, v) in [
            ("prefer_horizontal", self.prefer_horizontal),
            ("relative_scaling", self.relative_scaling),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(DomainError::Config(format!("{} must be in [0, 1], got {}", name, v)));
            }
        }
        Ok(())
    }
}
