//! # Staff Roster
//!
//! Keeps a small roster of staff records (integer id, display name) in a
//! delimited text file, with validated edits and a live search.
//!
//! ## Quick Start
//!
//! ```ignore
//! use staff_roster::prelude::*;
//!
//! // Open the roster file (missing or damaged rows are reported, not fatal)
//! let mut roster = Roster::open("./Data/MalinStaffNamesV3.csv")?;
//!
//! // Edits
//! let id = roster.insert("Frank").unwrap();
//! roster.rename(id, "Franklin");
//!
//! // Search: integer text matches id prefixes, anything else names
//! roster.search(Some("fra"));
//!
//! // Write the file back
//! roster.close();
//! ```
//!
//! ## Components
//!
//! The session is a thin layer over the workspace crates, each usable on
//! its own:
//!
//! - [`RecordStore`] - the in-memory map (`roster-core`)
//! - [`RosterFile`] - load and save (`roster-durability`)
//! - [`IdAllocator`] and [`RecordOps`] - validated edits (`roster-engine`)
//! - [`Filter`] and [`Query`] - search (`roster-search`)
//!
//! Every component reports through a [`Reporter`] handed to it; nothing is
//! logged through a global.

#![warn(missing_docs)]

mod error;
mod options;
mod roster;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use options::{
    base_dir, default_data_path, default_log_path, RosterOptions, DATA_DIR, DEFAULT_FILE_NAME,
    LOG_DIR, LOG_FILE_NAME,
};
pub use roster::{Roster, RosterBuilder};

// Re-export components
pub use roster_core::{
    BackingOrder, MemoryReporter, Record, RecordId, RecordStore, Report, Reporter, Severity,
    TracingReporter, NO_ID,
};
pub use roster_durability::{LoadResult, RosterFile};
pub use roster_engine::{IdAllocator, RecordOps};
pub use roster_search::{Filter, Query, SearchView};
