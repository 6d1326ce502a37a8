//! Infrastructure adapters. Implement outbound ports.
//!
//! Filesystem loaders, text processing, rendering, terminal UI. Map errors to
//! DomainError.

pub mod persistence;
pub mod render;
pub mod text;
pub mod ui;
