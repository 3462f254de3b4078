//! Record engine for the staff roster
//!
//! This crate holds the mutation side of the core:
//! - [`IdAllocator`]: linear-probe allocation of unused ids
//! - [`RecordOps`]: validated insert / rename / delete
//!
//! Both are stateless facades over a store owned by the caller; each is
//! constructed with the reporting sink it should use.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod allocator;
pub mod ops;

pub use allocator::{probe, IdAllocator};
pub use ops::RecordOps;
