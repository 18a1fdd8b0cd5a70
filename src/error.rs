//! Error types for the outer surfaces of the converter.
//!
//! Markdown conversion itself never fails; malformed syntax degrades to
//! text. These errors come from input policy (size limits) and from reading
//! or serializing documents.
use thiserror::Error;

/// Main error type for the Markdown engine.
#[derive(Debug, Error)]
pub enum MarkdownError {
    /// The input is larger than the configured limit.
    #[error("Input size {size} exceeds maximum allowed size {max}")]
    InputTooLarge { size: usize, max: usize },

    /// I/O related errors.
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Input bytes were not valid UTF-8.
    #[error("UTF-8 encoding error: {source}")]
    FromUtf8 {
        #[from]
        source: std::string::FromUtf8Error,
    },

    /// Token stream serialization errors.
    #[cfg(feature = "serde")]
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in the Markdown engine.
pub type Result<T> = std::result::Result<T, MarkdownError>;

impl MarkdownError {
    pub fn input_too_large(size: usize, max: usize) -> Self {
        MarkdownError::InputTooLarge { size, max }
    }

    /// Returns true if retrying with different input or configuration can
    /// succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            MarkdownError::InputTooLarge { .. } => true,
            MarkdownError::Io { .. } => false,
            MarkdownError::FromUtf8 { .. } => false,
            #[cfg(feature = "serde")]
            MarkdownError::Json { .. } => false,
        }
    }
}
