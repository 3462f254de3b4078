//! Core types for the staff roster
//!
//! This module defines the fundamental types used throughout the system:
//! - [`RecordId`]: Integer key of a staff record
//! - [`Record`]: One `(id, name)` pair as handed to collaborators
//! - [`BackingOrder`]: Iteration policy of a [`RecordStore`](crate::RecordStore)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique key of a staff record.
///
/// Signed, base-10 on disk. Negative keys are legal in the file format.
pub type RecordId = i32;

/// Numeric sentinel used by collaborators that cannot carry an `Option`.
///
/// The allocator itself returns `Option<RecordId>`; this value is what the
/// desktop front end historically displayed when allocation failed.
pub const NO_ID: RecordId = -1;

/// One staff record.
///
/// Records are produced by value from a store (search results, listings);
/// mutating a `Record` never touches the store it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Unique key
    pub id: RecordId,
    /// Display name, already trimmed
    pub name: String,
}

impl Record {
    /// Create a record from its parts
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Record {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

/// Iteration policy of a record store.
///
/// | Order | Iteration | Backing |
/// |-------|-----------|---------|
/// | `Insertion` | order records were added | `IndexMap` |
/// | `Sorted` | ascending id | `BTreeMap` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackingOrder {
    /// Insertion order ("ordinary" dictionary)
    #[default]
    Insertion,
    /// Ascending key order
    Sorted,
}

impl BackingOrder {
    /// Short lowercase label, used in logs and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            BackingOrder::Insertion => "insertion",
            BackingOrder::Sorted => "sorted",
        }
    }
}

impl fmt::Display for BackingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true when `name` has no visible content.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = Record::new(7, "Alice");
        assert_eq!(record.to_string(), "7: Alice");
    }

    #[test]
    fn test_backing_order_default_is_insertion() {
        assert_eq!(BackingOrder::default(), BackingOrder::Insertion);
        assert_eq!(BackingOrder::Sorted.to_string(), "sorted");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t "));
        assert!(!is_blank(" a "));
    }
}
