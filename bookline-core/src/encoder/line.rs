//! Line encoder: `"isbn", "title", "author", price`

use super::Encoder;
use crate::error::EncodeError;
use crate::types::Book;
use std::fmt;
use std::io::Write;

/// Field separator between the four values
pub(crate) const SEPARATOR: &str = ", ";

/// A string written between double quotes, with `"` and `\` escaped by `\`
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        f.write_char('"')?;
        for c in self.0.chars() {
            if c == '"' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}

/// Format one record without a trailing newline.
///
/// Price uses the shortest representation that parses back to the same `f64`.
pub(crate) fn fmt_line(book: &Book, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "{}{sep}{}{sep}{}{sep}{}",
        Quoted(book.isbn()),
        Quoted(book.title()),
        Quoted(book.author()),
        book.price(),
        sep = SEPARATOR,
    )
}

/// Line encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEncoder;

impl LineEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for LineEncoder {
    fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), EncodeError> {
        write!(writer, "{}", book)?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "line"
    }
}

/// Writes records one per line
pub struct RecordWriter<W: Write> {
    inner: W,
    encoder: LineEncoder,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            encoder: LineEncoder::new(),
            written: 0,
        }
    }

    /// Write a record followed by `\n`
    pub fn write(&mut self, book: &Book) -> Result<(), EncodeError> {
        self.encoder.encode(book, &mut self.inner)?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        tracing::trace!(isbn = book.isbn(), written = self.written, "record written");
        Ok(())
    }

    /// Write every record in order
    pub fn write_all<'a>(
        &mut self,
        books: impl IntoIterator<Item = &'a Book>,
    ) -> Result<(), EncodeError> {
        for book in books {
            self.write(book)?;
        }
        Ok(())
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), EncodeError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
