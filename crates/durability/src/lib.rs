//! Durability layer for the staff roster
//!
//! This crate moves a [`RecordStore`](roster_core::RecordStore) to and from
//! the delimited roster file:
//! - Load: whole-file read with per-row validation and fault isolation
//! - Save: whole-file rewrite in store iteration order
//! - [`LoadResult`]: per-load counts and timing
//!
//! There is no partial or incremental persistence; the last full save wins.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod roster_file;

// Re-export commonly used types
pub use roster_file::{encode_store, LoadResult, RosterFile};
