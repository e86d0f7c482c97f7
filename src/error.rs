//! Error types for building and displaying flashcards.

use thiserror::Error;

/// Result type alias using FlashCardError.
pub type Result<T> = std::result::Result<T, FlashCardError>;

#[derive(Debug, Error)]
pub enum FlashCardError {
    /// A record lacks one of the two required keys.
    #[error("record {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
