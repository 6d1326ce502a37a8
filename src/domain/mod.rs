//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    ChatExport, Corpus, Message, MessageText, RenderReport, StopWordSet, TextEntry, TextSpan,
};
pub use errors::DomainError;
