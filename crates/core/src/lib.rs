//! Core types for the staff roster
//!
//! This crate defines the pieces every other roster crate builds on:
//! - [`RecordStore`]: keyed roster with a chosen [`BackingOrder`]
//! - [`Record`] / [`RecordId`]: the data model
//! - [`Reporter`]: the injected reporting sink
//! - [`Error`]: diagnostics raised inside core operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod report;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use report::{MemoryReporter, Report, Reporter, Severity, TracingReporter};
pub use store::{exists, Iter, RecordStore};
pub use types::{is_blank, BackingOrder, Record, RecordId, NO_ID};
