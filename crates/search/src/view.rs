//! Displayed search results
//!
//! `SearchView` is what a browse screen shows: the last query and the list
//! it produced. A refresh that fails leaves both untouched.

use crate::filter::Filter;
use crate::query::Query;
use roster_core::{Record, RecordStore, Reporter};

/// Last successful search and its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    query: Query,
    results: Vec<Record>,
}

impl Default for SearchView {
    fn default() -> Self {
        SearchView {
            query: Query::Empty,
            results: Vec::new(),
        }
    }
}

impl SearchView {
    /// Create a view showing nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Query behind the displayed results
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Displayed results, in store order
    pub fn results(&self) -> &[Record] {
        &self.results
    }

    /// Re-run the filter for `raw` against `store`.
    ///
    /// Returns `false` and keeps the previous results if the filter failed.
    pub fn refresh<R: Reporter>(
        &mut self,
        filter: &Filter<R>,
        store: Option<&RecordStore>,
        raw: Option<&str>,
    ) -> bool {
        let query = Query::parse(raw);
        match filter.apply_query(store, &query) {
            Some(results) => {
                self.query = query;
                self.results = results;
                true
            }
            None => false,
        }
    }

    /// Re-run the current query, e.g. after an edit
    pub fn rerun<R: Reporter>(&mut self, filter: &Filter<R>, store: Option<&RecordStore>) -> bool {
        let query = self.query.clone();
        match filter.apply_query(store, &query) {
            Some(results) => {
                self.results = results;
                true
            }
            None => false,
        }
    }

    /// Show nothing
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
