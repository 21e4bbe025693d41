//! The Book record - a single catalog entry

use super::price::Tolerance;
use crate::decoder::scan::is_space;
use crate::decoder::{Decoder, LineDecoder};
use crate::encoder::line::fmt_line;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A book record: ISBN, title, author and price.
///
/// No field is validated. Any string and any `f64` (negative, NaN) is accepted.
///
/// Equality compares the strings exactly and the price within
/// [`PRICE_EPSILON`](super::PRICE_EPSILON). Records are ordered by ISBN, then
/// author, then title, then price. Because of the price tolerance this is a weak
/// ordering: two records can be equivalent without being identical, and
/// equivalence is not transitive, so `Eq` and `Ord` are not implemented.
///
/// [`Book::compare`] is not a total order and must not be handed to
/// `slice::sort_by`, which may panic on it. Sort with [`Book::sort_cmp`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    price: f64,
}

impl Book {
    /// Create a record. Note the argument order: title, author, ISBN, price.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    /// The ISBN. Empty after [`take_isbn`](Self::take_isbn).
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// The title. Empty after [`take_title`](Self::take_title).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The author. Empty after [`take_author`](Self::take_author).
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The price
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Move the ISBN out, leaving an empty string behind
    pub fn take_isbn(&mut self) -> String {
        std::mem::take(&mut self.isbn)
    }

    /// Move the title out, leaving an empty string behind
    pub fn take_title(&mut self) -> String {
        std::mem::take(&mut self.title)
    }

    /// Move the author out, leaving an empty string behind
    pub fn take_author(&mut self) -> String {
        std::mem::take(&mut self.author)
    }

    /// Consume the record, returning `(isbn, title, author, price)`
    pub fn into_parts(self) -> (String, String, String, f64) {
        (self.isbn, self.title, self.author, self.price)
    }

    /// Replace the ISBN in place
    pub fn set_isbn(&mut self, isbn: impl Into<String>) -> &mut Self {
        self.isbn = isbn.into();
        self
    }

    /// Replace the title in place
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Replace the author in place
    pub fn set_author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = author.into();
        self
    }

    /// Replace the price in place
    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = price;
        self
    }

    /// Set the ISBN
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Field-wise equality with the default price tolerance
    pub fn equals(&self, other: &Book) -> bool {
        self.equals_within(other, Tolerance::default())
    }

    /// Field-wise equality with a caller-supplied price tolerance
    pub fn equals_within(&self, other: &Book, tolerance: Tolerance) -> bool {
        tolerance.approx_eq(self.price, other.price)
            && self.isbn == other.isbn
            && self.title == other.title
            && self.author == other.author
    }

    /// Three-way comparison: ISBN, author, title, then price.
    ///
    /// `Ordering::Equal` means equivalent, not identical.
    pub fn compare(&self, other: &Book) -> Ordering {
        self.compare_within(other, Tolerance::default())
    }

    /// Three-way comparison with a caller-supplied price tolerance
    pub fn compare_within(&self, other: &Book, tolerance: Tolerance) -> Ordering {
        self.compare_strings(other)
            .then_with(|| tolerance.compare(self.price, other.price))
    }

    /// Total order for sorting: ISBN, author, title, then price by
    /// [`f64::total_cmp`].
    ///
    /// Agrees with [`compare`](Self::compare) whenever that is not `Equal` and
    /// both prices are finite. Equivalent records end up adjacent.
    pub fn sort_cmp(&self, other: &Book) -> Ordering {
        self.compare_strings(other)
            .then_with(|| self.price.total_cmp(&other.price))
    }

    fn compare_strings(&self, other: &Book) -> Ordering {
        self.isbn
            .cmp(&other.isbn)
            .then_with(|| self.author.cmp(&other.author))
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Follows [`Book::compare`], except that a NaN price on either side of a
/// string tie is unordered.
impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare_strings(other) {
            Ordering::Equal if self.price.is_nan() || other.price.is_nan() => None,
            Ordering::Equal => Some(Tolerance::default().compare(self.price, other.price)),
            unequal => Some(unequal),
        }
    }
}

/// Writes the one-line text form: `"isbn", "title", "author", price`
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_line(self, f)
    }
}

/// Parses exactly one record; anything but whitespace after the price is an error
impl FromStr for Book {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = s.as_bytes();
        let book = LineDecoder::new().decode(&mut input)?;
        if input.iter().all(|&b| is_space(b)) {
            Ok(book)
        } else {
            Err(ParseError::TrailingInput(
                String::from_utf8_lossy(input).into_owned(),
            ))
        }
    }
}
