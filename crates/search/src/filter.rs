//! Filter engine
//!
//! Produces the ordered subset of a store that a query selects. The result
//! is recomputed in full on every call and follows store iteration order.

use crate::query::Query;
use roster_core::{exists, Record, RecordStore, Reporter};
use tracing::debug;

/// Lazily select the records of `store` that match `query`
pub fn matching<'a>(store: &'a RecordStore, query: &'a Query) -> impl Iterator<Item = Record> + 'a {
    store
        .iter()
        .filter(move |(id, name)| query.matches(*id, name))
        .map(|(id, name)| Record::new(id, name))
}

/// Filter engine bound to a reporting sink
pub struct Filter<R> {
    reporter: R,
}

impl<R: Reporter> Filter<R> {
    /// Create an engine that reports through `reporter`
    pub fn new(reporter: R) -> Self {
        Filter { reporter }
    }

    /// Records of `store` selected by the raw search text.
    ///
    /// An empty or missing query selects nothing. `None` (after one report)
    /// means the filter could not run; callers keep whatever they displayed
    /// before.
    pub fn apply(&self, store: Option<&RecordStore>, query: Option<&str>) -> Option<Vec<Record>> {
        self.apply_query(store, &Query::parse(query))
    }

    /// Same as [`Filter::apply`] with an already classified query
    pub fn apply_query(&self, store: Option<&RecordStore>, query: &Query) -> Option<Vec<Record>> {
        if !exists(store, &self.reporter) {
            return None;
        }
        let store = store?;

        let results: Vec<Record> = matching(store, query).collect();
        debug!(query = %query, matched = results.len(), "filtered roster");
        Some(results)
    }
}
