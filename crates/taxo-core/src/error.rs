//! Error types for taxograph.

use thiserror::Error;

/// Result type alias using taxograph's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for taxograph operations.
///
/// Lookup misses are deliberately not represented here: asking for the
/// descendants of an IRI the index does not contain is a normal outcome and
/// returns an empty set.
#[derive(Error, Debug)]
pub enum Error {
    /// Index construction failed; no partial index is published.
    #[error("Build error: {0}")]
    Build(String),

    /// A mutation named a parent IRI that does not exist in the index.
    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    /// Unique-IRI generation exceeded its retry bound.
    #[error("IRI space exhausted after {0} attempts")]
    IriSpaceExhausted(usize),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
