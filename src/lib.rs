//! chat-wordcloud: word cloud from a Telegram chat export, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
