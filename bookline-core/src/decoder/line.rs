//! Line decoder: the inverse of the line encoder

use super::scan::Scanner;
use super::Decoder;
use crate::error::ParseError;
use crate::types::Book;
use std::io::BufRead;

/// Line decoder
///
/// Reads `"isbn" , "title" , "author" , price`. Whitespace before every token is
/// skipped, so a record may span lines. The three separators may be any single
/// character; they are read and discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDecoder;

impl LineDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for LineDecoder {
    fn decode(&self, reader: &mut dyn BufRead) -> Result<Book, ParseError> {
        let mut scanner = Scanner::new(reader);

        if !scanner.skip_space()? {
            return Err(ParseError::EndOfInput);
        }

        let isbn = scanner.quoted("isbn")?;
        scanner.separator("separator after isbn")?;
        let title = scanner.quoted("title")?;
        scanner.separator("separator after title")?;
        let author = scanner.quoted("author")?;
        scanner.separator("separator after author")?;
        let price = scanner.price()?;

        Ok(Book::new(title, author, isbn, price))
    }

    fn format_name(&self) -> &str {
        "line"
    }
}

/// Reads records from a stream with sticky failure state.
///
/// A failed read leaves the target record unchanged and marks the reader as
/// failed. Every later read fails with [`ParseError::ReaderFailed`] until
/// [`clear`](Self::clear) is called.
pub struct RecordReader<R: BufRead> {
    inner: R,
    decoder: LineDecoder,
    failed: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            decoder: LineDecoder::new(),
            failed: false,
        }
    }

    /// Read the next record into `book`
    pub fn read_into(&mut self, book: &mut Book) -> Result<(), ParseError> {
        if self.failed {
            return Err(ParseError::ReaderFailed);
        }
        self.decoder
            .decode_into(&mut self.inner, book)
            .inspect_err(|e| self.mark_failed(e))
    }

    /// Read the next record
    pub fn read(&mut self) -> Result<Book, ParseError> {
        let mut book = Book::default();
        self.read_into(&mut book)?;
        Ok(book)
    }

    fn mark_failed(&mut self, err: &ParseError) {
        if !err.is_end_of_input() {
            tracing::debug!(error = %err, "record read failed");
        }
        self.failed = true;
    }

    /// Whether a read has failed since construction or the last `clear`
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Reset the failure state so reading can resume
    pub fn clear(&mut self) {
        if self.failed {
            tracing::trace!("record reader failure state cleared");
        }
        self.failed = false;
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Yields records until the input ends or a read fails. A parse error is
/// yielded once; clean end of input is not an error.
impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Book, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read() {
            Ok(book) => Some(Ok(book)),
            Err(ParseError::EndOfInput) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "978-0441013593", 9.99)
    }

    #[test]
    fn test_decode_line() {
        let mut input = r#""978-0441013593", "Dune", "Frank Herbert", 9.99"#.as_bytes();
        let book = LineDecoder::new().decode(&mut input).unwrap();
        assert_eq!(book, dune());
        assert_eq!(book.price(), 9.99);
    }

    #[test]
    fn test_decode_permissive_separators() {
        let mut input = "\"1\";\"T\" | \"A\"\n\t#  2.5".as_bytes();
        let book = LineDecoder::new().decode(&mut input).unwrap();
        assert_eq!(book, Book::new("T", "A", "1", 2.5));
    }

    #[test]
    fn test_decode_missing_separator_consumes_quote() {
        // The separator slot swallows the opening quote of the title
        let mut input = r#""1" "T", "A", 2.5"#.as_bytes();
        let err = LineDecoder::new().decode(&mut input).unwrap_err();
        assert!(matches!(err, ParseError::ExpectedQuote { field: "title", .. }));
    }

    #[test]
    fn test_decode_into_is_atomic() {
        let mut book = dune();
        let mut input = r#""111", "T""#.as_bytes();
        let err = LineDecoder::new()
            .decode_into(&mut input, &mut book)
            .unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
        assert_eq!(book.isbn(), "978-0441013593");
        assert_eq!(book.title(), "Dune");
    }

    #[test]
    fn test_empty_input_is_end_of_input() {
        let mut input = " \n\t ".as_bytes();
        let err = LineDecoder::new().decode(&mut input).unwrap_err();
        assert!(err.is_end_of_input());
    }

    #[test]
    fn test_reader_sticky_failure() {
        let text = "\"1\", \"A\", \"B\", x\n\"2\", \"C\", \"D\", 2\n";
        let mut reader = RecordReader::new(text.as_bytes());
        let mut book = dune();

        assert!(matches!(
            reader.read_into(&mut book),
            Err(ParseError::InvalidPrice(_))
        ));
        assert!(reader.is_failed());
        assert_eq!(book, dune());

        assert!(matches!(
            reader.read_into(&mut book),
            Err(ParseError::ReaderFailed)
        ));
        assert_eq!(book, dune());
    }

    #[test]
    fn test_reader_clear_resumes() {
        let text = "\"1\", \"A\", \"B\", oops\n\"2\", \"C\", \"D\", 2\n";
        let mut reader = RecordReader::new(text.as_bytes());
        assert!(reader.read().is_err());

        reader.clear();
        assert!(!reader.is_failed());
        let book = reader.read().unwrap();
        assert_eq!(book.isbn(), "2");
    }

    #[test]
    fn test_reader_end_of_input_fails_stream() {
        let mut reader = RecordReader::new(r#""1", "A", "B", 1"#.as_bytes());
        assert!(reader.read().is_ok());
        assert!(!reader.is_failed());
        assert!(reader.read().unwrap_err().is_end_of_input());
        assert!(reader.is_failed());
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let text = "\"1\", \"A\", \"B\", 1\n\"2\", \"C\"\n\"3\", \"E\", \"F\", 3\n";
        let results: Vec<_> = RecordReader::new(text.as_bytes()).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_iterator_clean_end() {
        let text = "\"1\", \"A\", \"B\", 1\n\"2\", \"C\", \"D\", 2\n\n";
        let books: Vec<Book> = RecordReader::new(text.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[1].author(), "D");
    }
}
