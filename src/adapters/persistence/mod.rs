//! Filesystem loaders for the pipeline inputs.

pub mod json_export;
pub mod stopwords_file;

pub use json_export::JsonExportSource;
pub use stopwords_file::FileStopWordSource;
