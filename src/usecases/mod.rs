//! Application use cases. Orchestrate domain logic via ports.

pub mod flatten;
pub mod wordcloud_service;

pub use flatten::{FlattenStats, Flattener, build_stop_words};
pub use wordcloud_service::{OUTPUT_FILE_NAME, WordCloudService, WordCloudSummary};
