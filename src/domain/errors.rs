//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Export, stop-word list or font file does not exist.
    #[error("{what} not found: {}", path.display())]
    MissingResource { what: &'static str, path: PathBuf },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl DomainError {
    /// Map a read failure: `NotFound` becomes `MissingResource`, anything else `Io`.
    pub fn from_read(what: &'static str, path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            DomainError::MissingResource {
                what,
                path: path.to_path_buf(),
            }
        } else if err.kind() == std::io::ErrorKind::InvalidData {
            DomainError::MalformedInput(format!("{} {}: {}", what, path.display(), err))
        } else {
            DomainError::Io(format!("read {} {}: {}", what, path.display(), err))
        }
    }
}
