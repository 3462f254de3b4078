//! Wire encoding for the staff roster file
//!
//! This crate implements the row-level codec of the on-disk format. It knows
//! nothing about records or keys: it splits text into rows of fields and
//! back, reporting malformed rows with their line number so that callers can
//! skip them and keep going.
//!
//! ## Examples
//!
//! ```
//! use roster_wire::{decode_rows, encode_row};
//!
//! let line = encode_row(&["2", "Smith, Jo"]);
//! assert_eq!(line, "2,\"Smith, Jo\"");
//!
//! let row = decode_rows(&line).next().unwrap().unwrap();
//! assert_eq!(row.fields, vec!["2", "Smith, Jo"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod csv;

// Re-export main types
pub use csv::{
    decode_rows, decode_text, encode_field, encode_row, Row, RowError, RowErrorKind, RowReader,
    DELIMITER,
};
