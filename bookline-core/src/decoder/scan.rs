//! Byte-level token scanning over a buffered reader
//!
//! Reads only as far as the current token, so records can be pulled one at a
//! time from a shared stream.

use crate::error::ParseError;
use std::io::{self, BufRead};

pub(crate) struct Scanner<'a> {
    reader: &'a mut dyn BufRead,
}

/// Whitespace skipped before every token
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_price_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Length of a UTF-8 sequence from its leading byte
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    }
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(reader: &'a mut dyn BufRead) -> Self {
        Self { reader }
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn bump(&mut self) -> io::Result<Option<u8>> {
        let b = self.peek()?;
        if b.is_some() {
            self.reader.consume(1);
        }
        Ok(b)
    }

    /// Skip whitespace; returns false when the input is exhausted
    pub(crate) fn skip_space(&mut self) -> io::Result<bool> {
        while let Some(b) = self.peek()? {
            if !is_space(b) {
                return Ok(true);
            }
            self.reader.consume(1);
        }
        Ok(false)
    }

    /// Read a `"`-delimited string, honouring `\` escapes
    pub(crate) fn quoted(&mut self, field: &'static str) -> Result<String, ParseError> {
        if !self.skip_space()? {
            return Err(ParseError::UnexpectedEof { field });
        }
        match self.peek()? {
            Some(b'"') => {
                self.reader.consume(1);
            }
            Some(_) => {
                let found = self.separator(field)?;
                return Err(ParseError::ExpectedQuote { field, found });
            }
            None => return Err(ParseError::UnexpectedEof { field }),
        }

        let mut bytes = Vec::new();
        loop {
            match self.bump()? {
                Some(b'"') => break,
                Some(b'\\') => match self.bump()? {
                    Some(escaped) => bytes.push(escaped),
                    None => return Err(ParseError::UnterminatedString { field }),
                },
                Some(b) => bytes.push(b),
                None => return Err(ParseError::UnterminatedString { field }),
            }
        }
        String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8 { field })
    }

    /// Read any single character and return it
    pub(crate) fn separator(&mut self, field: &'static str) -> Result<char, ParseError> {
        if !self.skip_space()? {
            return Err(ParseError::UnexpectedEof { field });
        }
        let lead = match self.bump()? {
            Some(b) => b,
            None => return Err(ParseError::UnexpectedEof { field }),
        };
        let mut buf = [lead, 0, 0, 0];
        let width = utf8_width(lead);
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self
                .bump()?
                .ok_or(ParseError::UnexpectedEof { field })?;
        }
        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or(ParseError::InvalidUtf8 { field })
    }

    /// Read a price token and parse it as `f64`
    pub(crate) fn price(&mut self) -> Result<f64, ParseError> {
        if !self.skip_space()? {
            return Err(ParseError::UnexpectedEof { field: "price" });
        }
        let mut token = String::new();
        while let Some(b) = self.peek()? {
            if !is_price_byte(b) {
                break;
            }
            token.push(char::from(b));
            self.reader.consume(1);
        }
        token
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidPrice(token))
    }
}
