//! Validated record mutations
//!
//! `RecordOps` is a stateless facade over a caller-owned [`RecordStore`]:
//! - `insert`: allocate a fresh id and add a trimmed name
//! - `rename`: overwrite the name of an existing record
//! - `delete`: remove a record, succeeding whether or not it existed
//!
//! Every call produces exactly one report and returns its outcome as a
//! value; nothing is raised past the call. The caller is responsible for
//! serializing access to the store.

use crate::allocator;
use roster_core::{exists, is_blank, Error, RecordId, RecordStore, Reporter};

/// Record mutations bound to a reporting sink
pub struct RecordOps<R> {
    reporter: R,
}

impl<R: Reporter> RecordOps<R> {
    /// Create a facade that reports through `reporter`
    pub fn new(reporter: R) -> Self {
        RecordOps { reporter }
    }

    /// Add a staff member under a freshly allocated id.
    ///
    /// Fails for an absent store, a blank name, or when no id can be
    /// allocated (an empty store has no anchor to allocate from).
    pub fn insert(&self, store: Option<&mut RecordStore>, name: &str) -> Option<RecordId> {
        if !exists(store.as_deref(), &self.reporter) {
            return None;
        }
        let store = store?;

        if is_blank(name) {
            self.reporter
                .report_err(&Error::BlankName("unable to add a new staff member"));
            return None;
        }
        let name = name.trim();

        let id = match allocator::probe(Some(&*store)) {
            Ok(id) => id,
            Err(e) => {
                self.reporter
                    .error("failed to generate a new unique ID", Some(&e));
                return None;
            }
        };

        if !store.insert(id, name) {
            self.reporter.error(
                &format!("ID {} was taken while adding a new staff member", id),
                None,
            );
            return None;
        }

        self.reporter
            .info(&format!("added a new staff member with ID {}", id));
        Some(id)
    }

    /// Replace the name stored under `id`.
    ///
    /// An unknown id is an ordinary outcome: one not-found warning and
    /// `false`.
    pub fn rename(&self, store: Option<&mut RecordStore>, id: RecordId, name: &str) -> bool {
        if !exists(store.as_deref(), &self.reporter) {
            return false;
        }
        let Some(store) = store else {
            return false;
        };

        let context = "unable to update the staff member's details";
        if store.is_empty() {
            self.reporter.report_err(&Error::NoData(context));
            return false;
        }
        if is_blank(name) {
            self.reporter.report_err(&Error::BlankName(context));
            return false;
        }

        if !store.set_name(id, name.trim()) {
            self.reporter.report_err(&Error::NotFound(id));
            return false;
        }

        self.reporter
            .info(&format!("updated the record matching ID {}", id));
        true
    }

    /// Remove the record stored under `id`.
    ///
    /// Removing an id that is not present still succeeds, so deleting twice
    /// is harmless. Only an absent store fails.
    pub fn delete(&self, store: Option<&mut RecordStore>, id: RecordId) -> bool {
        if !exists(store.as_deref(), &self.reporter) {
            return false;
        }
        let Some(store) = store else {
            return false;
        };

        store.remove(id);
        self.reporter
            .info(&format!("deleted the record matching ID {}", id));
        true
    }
}
