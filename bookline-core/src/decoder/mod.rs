//! Decoders for reading records from text

mod line;
pub(crate) mod scan;

pub use line::{LineDecoder, RecordReader};

use crate::error::ParseError;
use crate::types::Book;
use std::io::BufRead;

/// Trait for decoding a record from an input format
pub trait Decoder: Send + Sync {
    /// Decode a single record, consuming input only up to its last token
    fn decode(&self, reader: &mut dyn BufRead) -> Result<Book, ParseError>;

    /// Decode into an existing record.
    ///
    /// The record is replaced only when the whole record parses; on error it is
    /// left exactly as it was.
    fn decode_into(&self, reader: &mut dyn BufRead, book: &mut Book) -> Result<(), ParseError> {
        *book = self.decode(reader)?;
        Ok(())
    }

    /// Format name (e.g., "line")
    fn format_name(&self) -> &str;
}
