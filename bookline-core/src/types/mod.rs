//! Core types for Bookline records

mod book;
mod price;

pub use book::Book;
pub use price::{compare_prices, prices_equal, Tolerance, PRICE_EPSILON};
