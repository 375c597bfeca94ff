//! Error types for Line Rank

use thiserror::Error;

/// Line Rank error type
#[derive(Error, Debug)]
pub enum Error {
    /// Document bytes are not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unknown or malformed option value
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// Result type alias for Line Rank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Borrow caller-supplied bytes as document text.
///
/// The bytes are not copied; the returned `&str` points into `bytes`.
pub fn decode_document(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}
