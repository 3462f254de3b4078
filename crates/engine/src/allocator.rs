//! Fresh ID allocation
//!
//! The allocator takes the first key in store iteration order as the anchor
//! and probes `anchor + 1`, `anchor + 2`, ... until it finds a key that is not
//! in use. It is a linear probe, not a max-based allocator: the result is
//! guaranteed unused, not guaranteed larger than every existing key. With a
//! sorted store the anchor is the smallest key, so gaps above it are reused.

use roster_core::{Error, RecordId, RecordStore, Reporter, Result};
use tracing::debug;

/// Find an unused key by probing upward from the anchor.
///
/// Pure: no reporting. Fails with `NoData` for an absent or empty store and
/// with `IdSpaceExhausted` if the probe would pass `RecordId::MAX`.
pub fn probe(store: Option<&RecordStore>) -> Result<RecordId> {
    let no_anchor = || Error::NoData("unable to create a new staff ID");
    let store = store.ok_or_else(no_anchor)?;
    let anchor = store.first_id().ok_or_else(no_anchor)?;

    let exhausted = || Error::IdSpaceExhausted { anchor };
    let mut candidate = anchor.checked_add(1).ok_or_else(exhausted)?;
    while store.contains(candidate) {
        candidate = candidate.checked_add(1).ok_or_else(exhausted)?;
    }

    debug!(anchor, candidate, "probed for a free ID");
    Ok(candidate)
}

/// ID allocator bound to a reporting sink
pub struct IdAllocator<R> {
    reporter: R,
}

impl<R: Reporter> IdAllocator<R> {
    /// Create an allocator that reports through `reporter`
    pub fn new(reporter: R) -> Self {
        IdAllocator { reporter }
    }

    /// Produce a key absent from `store`.
    ///
    /// `None` (after one report) when the store is absent or empty, since
    /// there is no key to anchor on, or when the key space above the anchor
    /// is used up. Collaborators that need the numeric sentinel map `None`
    /// to [`NO_ID`](roster_core::NO_ID).
    pub fn next_id(&self, store: Option<&RecordStore>) -> Option<RecordId> {
        match probe(store) {
            Ok(id) => {
                self.reporter
                    .info(&format!("created a new ID number: {}", id));
                Some(id)
            }
            Err(e) => {
                self.reporter.report_err(&e);
                None
            }
        }
    }
}
