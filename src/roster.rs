//! Roster session: the main entry point.
//!
//! A [`Roster`] owns the record store for the lifetime of a session. It
//! loads the file when opened, routes edits through the core components,
//! tracks whether anything changed, and writes the file back on `save` or
//! `close`. Every operation delivers its outcome through the session's
//! [`Reporter`].

use crate::error::Result;
use crate::options::RosterOptions;
use roster_core::{BackingOrder, Record, RecordId, RecordStore, Reporter, TracingReporter};
use roster_durability::{LoadResult, RosterFile};
use roster_engine::RecordOps;
use roster_search::{Filter, Query, SearchView};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An open staff roster.
///
/// # Example
///
/// ```ignore
/// use staff_roster::prelude::*;
///
/// let mut roster = Roster::open("./Data/staff.csv")?;
/// let id = roster.insert("Frank");
/// roster.search(Some("fra"));
/// for record in roster.results() {
///     println!("{}", record);
/// }
/// roster.close();
/// ```
pub struct Roster<R: Reporter = TracingReporter> {
    path: PathBuf,
    store: RecordStore,
    view: SearchView,
    load: LoadResult,
    dirty: bool,
    reporter: R,
}

impl Roster<TracingReporter> {
    /// Open the roster file at `path` with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        RosterBuilder::new().path(path).open()
    }

    /// Create a builder for custom configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let roster = Roster::builder()
    ///     .path("./Data/staff.csv")
    ///     .sorted()
    ///     .open()?;
    /// ```
    pub fn builder() -> RosterBuilder {
        RosterBuilder::new()
    }
}

impl<R: Reporter> Roster<R> {
    fn load_from(path: PathBuf, ordering: BackingOrder, reporter: R) -> Self {
        let (store, load) = RosterFile::new(&reporter).load_with_report(&path, ordering);
        Roster {
            path,
            store,
            view: SearchView::new(),
            load,
            dirty: false,
            reporter,
        }
    }

    /// Roster file this session reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records currently held in memory
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Outcome of the most recent load
    pub fn load_result(&self) -> &LoadResult {
        &self.load
    }

    /// Check if there are edits not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Sink this session reports through
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Every record, in store order
    pub fn list(&self) -> Vec<Record> {
        self.store.records()
    }

    /// Look up one record
    pub fn get(&self, id: RecordId) -> Option<Record> {
        self.store.get(id).map(|name| Record::new(id, name))
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Run a search and make its results the displayed list.
    ///
    /// Returns `false` if the filter could not run; the previous list stays.
    pub fn search(&mut self, raw: Option<&str>) -> bool {
        let filter = Filter::new(&self.reporter);
        self.view.refresh(&filter, Some(&self.store), raw)
    }

    /// Query behind the displayed list
    pub fn query(&self) -> &Query {
        self.view.query()
    }

    /// Displayed search results
    pub fn results(&self) -> &[Record] {
        self.view.results()
    }

    /// Blank the displayed list
    pub fn clear_results(&mut self) {
        self.view.clear();
    }

    fn refresh_view(&mut self) {
        let filter = Filter::new(&self.reporter);
        self.view.rerun(&filter, Some(&self.store));
    }

    // ========================================================================
    // Edits
    // ========================================================================

    /// Add a staff member; returns the new id
    pub fn insert(&mut self, name: &str) -> Option<RecordId> {
        let id = RecordOps::new(&self.reporter).insert(Some(&mut self.store), name)?;
        self.dirty = true;
        self.refresh_view();
        Some(id)
    }

    /// Rename the staff member stored under `id`
    pub fn rename(&mut self, id: RecordId, name: &str) -> bool {
        if !RecordOps::new(&self.reporter).rename(Some(&mut self.store), id, name) {
            return false;
        }
        self.dirty = true;
        self.refresh_view();
        true
    }

    /// Remove the staff member stored under `id`
    pub fn delete(&mut self, id: RecordId) -> bool {
        let existed = self.store.contains(id);
        if !RecordOps::new(&self.reporter).delete(Some(&mut self.store), id) {
            return false;
        }
        if existed {
            self.dirty = true;
            self.refresh_view();
        }
        true
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Write every record back to the roster file
    pub fn save(&mut self) -> bool {
        let saved = RosterFile::new(&self.reporter).save(&self.path, Some(&self.store));
        if saved {
            self.dirty = false;
        }
        saved
    }

    /// Discard in-memory edits and read the file again
    pub fn reload(&mut self) {
        let ordering = self.store.ordering();
        let (store, load) = RosterFile::new(&self.reporter).load_with_report(&self.path, ordering);
        self.store = store;
        self.load = load;
        self.dirty = false;
        self.refresh_view();
    }

    /// Save and end the session.
    ///
    /// Returns whether the final save succeeded; the session ends either way.
    pub fn close(mut self) -> bool {
        debug!(path = %self.path.display(), dirty = self.dirty, "closing roster");
        self.save()
    }
}

/// Builder for session configuration.
///
/// # Example
///
/// ```ignore
/// // Default file next to the executable, insertion order
/// let roster = Roster::builder().open()?;
///
/// // Explicit file, sorted by id, reports kept in memory
/// let reporter = Arc::new(MemoryReporter::new());
/// let roster = Roster::builder()
///     .path("staff.csv")
///     .sorted()
///     .open_with(reporter.clone())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterBuilder {
    options: RosterOptions,
}

impl RosterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing options
    pub fn options(mut self, options: RosterOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the roster file path.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.options.data_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the store iteration order.
    pub fn ordering(mut self, ordering: BackingOrder) -> Self {
        self.options.ordering = ordering;
        self
    }

    /// Keep records sorted by id.
    pub fn sorted(self) -> Self {
        self.ordering(BackingOrder::Sorted)
    }

    /// Keep records in the order they were added (default).
    pub fn insertion(self) -> Self {
        self.ordering(BackingOrder::Insertion)
    }

    /// Open the roster, reporting through `tracing`.
    pub fn open(self) -> Result<Roster<TracingReporter>> {
        self.open_with(TracingReporter)
    }

    /// Open the roster, reporting through `reporter`.
    ///
    /// Fails only if the default file location cannot be resolved. A missing
    /// or damaged file still opens, with whatever rows were valid.
    pub fn open_with<R: Reporter>(self, reporter: R) -> Result<Roster<R>> {
        let path = self.options.resolve_data_path()?;
        Ok(Roster::load_from(path, self.options.ordering, reporter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{MemoryReporter, Severity};
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn open(dir: &TempDir, content: &str) -> (Roster<Arc<MemoryReporter>>, Arc<MemoryReporter>) {
        let path = dir.path().join("staff.csv");
        fs::write(&path, content).unwrap();
        let reporter = Arc::new(MemoryReporter::new());
        let roster = Roster::builder()
            .path(&path)
            .open_with(reporter.clone())
            .unwrap();
        (roster, reporter)
    }

    #[test]
    fn test_open_loads_file() {
        let dir = TempDir::new().unwrap();
        let (roster, reporter) = open(&dir, "1,Alice\n2,Bob\n");

        assert_eq!(roster.store().len(), 2);
        assert_eq!(roster.load_result().records_loaded, 2);
        assert!(!roster.is_dirty());
        assert_eq!(reporter.count(Severity::Info), 1);
    }

    #[test]
    fn test_open_missing_file_is_empty_session() {
        let dir = TempDir::new().unwrap();
        let reporter = Arc::new(MemoryReporter::new());
        let roster = Roster::builder()
            .path(dir.path().join("missing.csv"))
            .open_with(reporter.clone())
            .unwrap();

        assert!(roster.store().is_empty());
        assert!(!roster.load_result().file_read);
        assert_eq!(reporter.count(Severity::Error), 1);
    }

    #[test]
    fn test_edits_mark_dirty_and_save_clears() {
        let dir = TempDir::new().unwrap();
        let (mut roster, _) = open(&dir, "5,Eve\n");

        assert_eq!(roster.insert("Frank"), Some(6));
        assert!(roster.is_dirty());
        assert!(roster.save());
        assert!(!roster.is_dirty());

        let text = fs::read_to_string(roster.path()).unwrap();
        assert_eq!(text, "5,Eve\n6,Frank\n");
    }

    #[test]
    fn test_deleting_missing_id_is_not_an_edit() {
        let dir = TempDir::new().unwrap();
        let (mut roster, _) = open(&dir, "1,Alice\n");

        assert!(roster.delete(9));
        assert!(!roster.is_dirty());
        assert!(roster.delete(1));
        assert!(roster.is_dirty());
    }

    #[test]
    fn test_results_follow_edits() {
        let dir = TempDir::new().unwrap();
        let (mut roster, _) = open(&dir, "1,Alice\n2,Bob\n");

        assert!(roster.search(Some("al")));
        assert_eq!(roster.results(), &[Record::new(1, "Alice")]);

        roster.rename(2, "Alan");
        assert_eq!(roster.results().len(), 2);

        roster.delete(1);
        assert_eq!(roster.results(), &[Record::new(2, "Alan")]);

        roster.clear_results();
        assert!(roster.results().is_empty());
    }

    #[test]
    fn test_reload_discards_edits() {
        let dir = TempDir::new().unwrap();
        let (mut roster, _) = open(&dir, "1,Alice\n");

        roster.insert("Bob");
        roster.reload();
        assert_eq!(roster.list(), vec![Record::new(1, "Alice")]);
        assert!(!roster.is_dirty());
    }

    #[test]
    fn test_close_saves() {
        let dir = TempDir::new().unwrap();
        let (mut roster, reporter) = open(&dir, "1,Alice\n");
        let path = roster.path().to_path_buf();

        roster.rename(1, "Alicia");
        assert!(roster.close());
        assert_eq!(fs::read_to_string(path).unwrap(), "1,Alicia\n");
        assert!(reporter
            .messages(Severity::Info)
            .iter()
            .any(|m| m.starts_with("roster saved to")));
    }

    #[test]
    fn test_sorted_builder() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("staff.csv");
        fs::write(&path, "3,C\n1,A\n2,B\n").unwrap();

        let roster = Roster::builder()
            .path(&path)
            .sorted()
            .open_with(MemoryReporter::new())
            .unwrap();
        let ids: Vec<_> = roster.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(roster.get(2), Some(Record::new(2, "B")));
    }
}
