use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not find data file at: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid speaker record at position {index}: {source}")]
    InvalidRecord {
        index: usize,
        source: serde_json::Error,
    },

    #[error("Data format not recognized. Expected a list of speaker records.")]
    UnrecognizedFormat,
}

pub type Result<T> = std::result::Result<T, Error>;
