//! Error types for presentation text extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during presentation text extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The input bytes are not a valid ZIP container.
    ///
    /// Fatal for the whole extraction: a presentation package that cannot
    /// be opened has no recoverable parts.
    #[error("Invalid presentation archive: {0}")]
    Archive(String),

    /// An expected archive member is absent.
    #[error("Archive entry not found: {0}")]
    EntryNotFound(String),

    /// An XML part is malformed (unterminated tags, bad entity references).
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Failed to serialize the extracted document to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other unexpected failure while processing a single slide.
    #[error("Extraction error: {0}")]
    Extraction(String),
}
