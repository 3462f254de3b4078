//! In-memory record store
//!
//! `RecordStore` is the authoritative roster for one session: a map from
//! [`RecordId`] to name with unique keys. The iteration order is chosen at
//! construction through [`BackingOrder`]:
//!
//! - `Insertion`: `IndexMap`, removal keeps the order of the survivors
//! - `Sorted`: `BTreeMap`, ascending id
//!
//! Everything above this module (allocator, operations, filter, codec) only
//! uses `iter`, `contains` and the mutators below, so it behaves the same
//! under either backing.

use crate::report::Reporter;
use crate::types::{BackingOrder, Record, RecordId};
use indexmap::IndexMap;
use std::collections::btree_map;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Backing {
    Insertion(IndexMap<RecordId, String>),
    Sorted(BTreeMap<RecordId, String>),
}

/// Keyed roster of staff records.
///
/// # Invariants
///
/// - No two records share an id. [`RecordStore::insert`] refuses to overwrite.
/// - Iteration order is a property of the backing, never of the caller.
#[derive(Debug, Clone)]
pub struct RecordStore {
    backing: Backing,
}

impl RecordStore {
    /// Create an empty store with the given iteration policy
    pub fn new(order: BackingOrder) -> Self {
        let backing = match order {
            BackingOrder::Insertion => Backing::Insertion(IndexMap::new()),
            BackingOrder::Sorted => Backing::Sorted(BTreeMap::new()),
        };
        RecordStore { backing }
    }

    /// Build a store from pairs; the first occurrence of a key wins
    pub fn from_pairs<I, S>(order: BackingOrder, pairs: I) -> Self
    where
        I: IntoIterator<Item = (RecordId, S)>,
        S: Into<String>,
    {
        let mut store = RecordStore::new(order);
        for (id, name) in pairs {
            store.insert(id, name);
        }
        store
    }

    /// Iteration policy of this store
    pub fn ordering(&self) -> BackingOrder {
        match self.backing {
            Backing::Insertion(_) => BackingOrder::Insertion,
            Backing::Sorted(_) => BackingOrder::Sorted,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::Insertion(map) => map.len(),
            Backing::Sorted(map) => map.len(),
        }
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a record with `id` exists
    pub fn contains(&self, id: RecordId) -> bool {
        match &self.backing {
            Backing::Insertion(map) => map.contains_key(&id),
            Backing::Sorted(map) => map.contains_key(&id),
        }
    }

    /// Name stored under `id`
    pub fn get(&self, id: RecordId) -> Option<&str> {
        match &self.backing {
            Backing::Insertion(map) => map.get(&id).map(String::as_str),
            Backing::Sorted(map) => map.get(&id).map(String::as_str),
        }
    }

    /// Insert a new record.
    ///
    /// Returns `false` and leaves the store untouched when `id` is taken.
    pub fn insert(&mut self, id: RecordId, name: impl Into<String>) -> bool {
        if self.contains(id) {
            return false;
        }
        let name = name.into();
        match &mut self.backing {
            Backing::Insertion(map) => map.insert(id, name),
            Backing::Sorted(map) => map.insert(id, name),
        };
        true
    }

    /// Overwrite the name of an existing record.
    ///
    /// Returns `false` when `id` is absent; never creates a record.
    pub fn set_name(&mut self, id: RecordId, name: impl Into<String>) -> bool {
        let slot = match &mut self.backing {
            Backing::Insertion(map) => map.get_mut(&id),
            Backing::Sorted(map) => map.get_mut(&id),
        };
        match slot {
            Some(current) => {
                *current = name.into();
                true
            }
            None => false,
        }
    }

    /// Remove a record, returning its name if it was present
    pub fn remove(&mut self, id: RecordId) -> Option<String> {
        match &mut self.backing {
            Backing::Insertion(map) => map.shift_remove(&id),
            Backing::Sorted(map) => map.remove(&id),
        }
    }

    /// First key in iteration order
    pub fn first_id(&self) -> Option<RecordId> {
        self.iter().next().map(|(id, _)| id)
    }

    /// Iterate `(id, name)` pairs in backing order
    pub fn iter(&self) -> Iter<'_> {
        let inner = match &self.backing {
            Backing::Insertion(map) => IterInner::Insertion(map.iter()),
            Backing::Sorted(map) => IterInner::Sorted(map.iter()),
        };
        Iter { inner }
    }

    /// Snapshot of all records in backing order
    pub fn records(&self) -> Vec<Record> {
        self.iter().map(|(id, name)| Record::new(id, name)).collect()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(BackingOrder::default())
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = (RecordId, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`RecordStore`]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

enum IterInner<'a> {
    Insertion(indexmap::map::Iter<'a, RecordId, String>),
    Sorted(btree_map::Iter<'a, RecordId, String>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = (RecordId, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, name) = match &mut self.inner {
            IterInner::Insertion(it) => it.next()?,
            IterInner::Sorted(it) => it.next()?,
        };
        Some((*id, name.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Insertion(it) => it.size_hint(),
            IterInner::Sorted(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Guard used by every core operation before touching a store.
///
/// An absent handle means the collaborator never finished loading; that is
/// reported once as a warning and answered with `false`.
pub fn exists(store: Option<&RecordStore>, reporter: &dyn Reporter) -> bool {
    if store.is_none() {
        reporter.warn("unable to validate that roster data exists, no data was found");
        return false;
    }
    true
}
