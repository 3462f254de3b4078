//! Delimited (comma-separated) row codec
//!
//! The roster file holds one record per line, two fields, no header:
//!
//! ```text
//! 1,Alice
//! 2,"Smith, Jo"
//! ```
//!
//! Quoting follows the usual convention: a field that contains the
//! delimiter, a quote, a line break, or leading/trailing whitespace is wrapped
//! in quotes and embedded quotes are doubled.

mod decode;
mod encode;

pub use decode::{decode_rows, decode_text, Row, RowError, RowErrorKind, RowReader};
pub use encode::{encode_field, encode_row, DELIMITER};
