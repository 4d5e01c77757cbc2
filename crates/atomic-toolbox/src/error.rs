//! Library error type.

use thiserror::Error;

/// Errors surfaced by fallible toolbox operations.
///
/// Sentence generation and sitemap persistence never return these to their
/// callers; they show up only at configuration and file-reading boundaries.
#[derive(Debug, Error)]
pub enum ToolboxError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xml error: {0}")]
    Xml(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("word list is empty after tokenization")]
    EmptyWordList,
}

pub type Result<T> = std::result::Result<T, ToolboxError>;
