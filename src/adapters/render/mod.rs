//! Word-cloud rendering: frequencies, layout, rasterization, PNG output.

pub mod frequency;
pub mod glyph;
pub mod layout;
pub mod options;
pub mod png_renderer;

pub use glyph::{FontRasterizer, WordRasterizer};
pub use options::{Color, RenderOptions};
pub use png_renderer::WordCloudRenderer;
