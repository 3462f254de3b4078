//! Convenient imports for the roster.
//!
//! ```ignore
//! use staff_roster::prelude::*;
//!
//! let mut roster = Roster::open("staff.csv")?;
//! roster.search(Some("7"));
//! ```

// Main entry point
pub use crate::roster::{Roster, RosterBuilder};
pub use crate::options::RosterOptions;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use roster_core::{BackingOrder, Record, RecordId, NO_ID};

// Reporting
pub use roster_core::{MemoryReporter, Reporter, Severity, TracingReporter};

// Search
pub use roster_search::Query;
