//! Error types for the book builder

use thiserror::Error;

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a book
#[derive(Error, Debug)]
pub enum Error {
    /// The document violates a structural invariant
    #[error("Invalid document: {0}")]
    Content(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An outbound request to the image service failed
    #[error("Backend request failed: {0}")]
    Backend(String),

    /// A service response could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Filesystem error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
