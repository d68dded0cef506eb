use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DetectorError>;

#[derive(Error, Debug)]
pub enum DetectorError {
    /// The reference document or the threshold cannot be used to build a detector.
    #[error("initialization error: {0}")]
    Initialization(String),

    /// A single document lacks usable content. Contained to that document.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A language resource (stopwords, word tokenizer) is missing.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// A source file cannot be read or parsed.
    #[error("failed to read file {}: {reason}", path.display())]
    FileAccess { path: PathBuf, reason: String },
}
