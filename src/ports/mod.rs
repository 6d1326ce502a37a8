//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into loaders, text processing and the
//! renderer. The CLI in `main.rs` drives the use case directly.

pub mod outbound;

pub use outbound::{
    ExportSource, ProgressReporter, Renderer, Shaper, StopWordSource, TextNormalizer, Tokenizer,
};
