//! Error types for Bookline Core

use thiserror::Error;

/// Result type alias using BooklineError
pub type Result<T> = std::result::Result<T, BooklineError>;

/// Top-level error type for all Bookline operations
#[derive(Debug, Error)]
pub enum BooklineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Errors that occur while reading a record from text
#[derive(Debug, Error)]
pub enum ParseError {
    /// No record left in the input; only whitespace remained
    #[error("End of input")]
    EndOfInput,

    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("Expected opening quote for {field}, found {found:?}")]
    ExpectedQuote { field: &'static str, found: char },

    #[error("Unterminated quoted string in {field}")]
    UnterminatedString { field: &'static str },

    #[error("Invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("Unexpected input after record: {0:?}")]
    TrailingInput(String),

    /// The reader failed earlier and has not been cleared
    #[error("Reader is in a failed state")]
    ReaderFailed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// True when the input simply ran out before a new record started
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ParseError::EndOfInput)
    }
}

/// Errors that occur while writing a record as text
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
