//! Encoders for writing records as text

pub(crate) mod line;

pub use line::{LineEncoder, RecordWriter};

use crate::error::EncodeError;
use crate::types::Book;
use std::io::Write;

/// Trait for encoding a record to an output format
pub trait Encoder: Send + Sync {
    /// Encode a single record to a writer
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), EncodeError>;

    /// Format name (e.g., "line")
    fn format_name(&self) -> &str;
}
