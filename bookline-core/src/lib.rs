//! Bookline Core Library
//!
//! This crate provides the `Book` record value type used by the Bookline catalog:
//! an ISBN, title, author and price with tolerant price equality, a weak ordering,
//! and a symmetric one-line text format for reading and writing records.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use decoder::{Decoder, LineDecoder, RecordReader};
pub use encoder::{Encoder, LineEncoder, RecordWriter};
pub use error::{BooklineError, EncodeError, ParseError, Result};
pub use types::{compare_prices, prices_equal, Book, Tolerance, PRICE_EPSILON};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Test Book", "Jane Doe", "978-0", 12.5);
        assert_eq!(book.title(), "Test Book");
        assert_eq!(book.author(), "Jane Doe");
        assert_eq!(book.isbn(), "978-0");
    }
}
