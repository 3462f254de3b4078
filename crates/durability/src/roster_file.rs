//! Load and save of the roster file
//!
//! This module implements the file side of a session:
//! - Load: read the whole file, decode rows, validate each row on its own
//! - Save: serialize every record in store order, overwrite the file
//!
//! ## Fault isolation
//!
//! Each row is validated independently. An empty field, a non-integer key,
//! a duplicate key or an unterminated quote produces one line-numbered
//! warning and the row is skipped; the rows after it are still loaded.
//! Misplaced quotes and undecodable bytes are warned about but the row is
//! kept, quotes as data and bad bytes as U+FFFD, so a later save does not
//! drop the record. A missing or unreadable file produces one error and an
//! empty store.
//!
//! ## Usage
//!
//! ```ignore
//! let file = RosterFile::new(TracingReporter);
//! let (store, result) = file.load_with_report(path, BackingOrder::Sorted);
//! println!("{}", result.summary());
//! // ... edits ...
//! file.save(path, Some(&store));
//! ```

use roster_core::{
    exists, BackingOrder, Error, RecordId, RecordStore, Reporter, Result,
};
use roster_wire::{decode_rows, decode_text, encode_row, Row, RowError};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

// ============================================================================
// Load Result
// ============================================================================

/// Outcome of one load
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// Whether the file was found and read
    pub file_read: bool,
    /// Records inserted into the store
    pub records_loaded: usize,
    /// Rows with an empty key or name
    pub empty_fields: usize,
    /// Rows whose key is not an integer
    pub invalid_keys: usize,
    /// Rows whose key was already loaded
    pub duplicate_keys: usize,
    /// Rows the codec could not split
    pub bad_rows: usize,
    /// Rows loaded despite misplaced quotes
    pub bad_data_kept: usize,
    /// Lines whose undecodable bytes were replaced
    pub invalid_text: usize,
    /// Total load time (microseconds)
    pub load_time_micros: u64,
}

impl LoadResult {
    /// Rows rejected for any reason
    pub fn rows_skipped(&self) -> usize {
        self.empty_fields + self.invalid_keys + self.duplicate_keys + self.bad_rows
    }

    /// Check if any row was rejected or repaired, or the file could not be read
    pub fn has_issues(&self) -> bool {
        !self.file_read || self.rows_skipped() > 0 || self.bad_data_kept + self.invalid_text > 0
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Load complete: {} records, {} skipped ({} empty, {} invalid key, {} duplicate, {} bad rows), {} repaired ({} bad data, {} bad text), {:.2}ms",
            self.records_loaded,
            self.rows_skipped(),
            self.empty_fields,
            self.invalid_keys,
            self.duplicate_keys,
            self.bad_rows,
            self.bad_data_kept + self.invalid_text,
            self.bad_data_kept,
            self.invalid_text,
            self.load_time_micros as f64 / 1000.0,
        )
    }

    fn count(&mut self, err: &Error) {
        match err {
            Error::EmptyField { .. } => self.empty_fields += 1,
            Error::InvalidKey { .. } => self.invalid_keys += 1,
            Error::DuplicateKey { .. } => self.duplicate_keys += 1,
            Error::BadRow { .. } => self.bad_rows += 1,
            _ => {}
        }
    }
}

// ============================================================================
// Roster File
// ============================================================================

/// File codec bound to a reporting sink.
///
/// Stateless apart from the sink: every call reads or writes the whole file.
pub struct RosterFile<R> {
    reporter: R,
}

impl<R: Reporter> RosterFile<R> {
    /// Create a codec that reports through `reporter`
    pub fn new(reporter: R) -> Self {
        RosterFile { reporter }
    }

    /// Load `path` into a new store.
    ///
    /// Never fails: problems are reported and the store holds whatever rows
    /// were valid (nothing, if the file could not be read).
    pub fn load(&self, path: &Path, order: BackingOrder) -> RecordStore {
        self.load_with_report(path, order).0
    }

    /// Load `path`, also returning counts and timing
    pub fn load_with_report(&self, path: &Path, order: BackingOrder) -> (RecordStore, LoadResult) {
        let started = Instant::now();
        let mut store = RecordStore::new(order);

        let bytes = match read_file(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.reporter.report_err(&e);
                return (store, LoadResult::default());
            }
        };
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let (text, replaced) = decode_text(&bytes);
        for &line in &replaced {
            self.reporter.report_err(&Error::InvalidText { line });
        }

        let mut result = self.decode_into(&text, &mut store);
        result.invalid_text = replaced.len();
        result.file_read = true;
        result.load_time_micros = started.elapsed().as_micros() as u64;

        self.reporter.info(&format!(
            "loaded {} records from {} in {:.2}ms ({} rows skipped)",
            result.records_loaded,
            path.display(),
            result.load_time_micros as f64 / 1000.0,
            result.rows_skipped()
        ));
        (store, result)
    }

    /// Decode `text` into `store`, reporting each rejected row.
    ///
    /// Keys already present in `store` count as duplicates.
    pub fn decode_into(&self, text: &str, store: &mut RecordStore) -> LoadResult {
        let mut result = LoadResult::default();

        for row in decode_rows(text) {
            let accepted = match row {
                Ok(row) => {
                    if let Some(bad) = &row.bad_data {
                        result.bad_data_kept += 1;
                        self.reporter.report_err(&bad_row(bad));
                    }
                    accept_row(&row, store)
                }
                Err(e) => Err(bad_row(&e)),
            };

            match accepted {
                Ok(()) => result.records_loaded += 1,
                Err(e) => {
                    result.count(&e);
                    self.reporter.report_err(&e);
                }
            }
        }
        result
    }

    /// Write every record of `store` to `path`, replacing the file.
    ///
    /// Returns `false` after one report if the store is absent or the write
    /// fails; the parent directory is not created.
    pub fn save(&self, path: &Path, store: Option<&RecordStore>) -> bool {
        if !exists(store, &self.reporter) {
            return false;
        }
        let Some(store) = store else {
            return false;
        };

        match write_file(path, &encode_store(store)) {
            Ok(()) => {
                self.reporter
                    .info(&format!("roster saved to {}", path.display()));
                true
            }
            Err(e) => {
                self.reporter.report_err(&e);
                false
            }
        }
    }
}

/// Serialize a store: one `id,name` row per record, `\n` terminated
pub fn encode_store(store: &RecordStore) -> String {
    let mut out = String::new();
    for (id, name) in store {
        out.push_str(&encode_row(&[&id.to_string(), name]));
        out.push('\n');
    }
    out
}

fn accept_row(row: &Row, store: &mut RecordStore) -> Result<()> {
    let line = row.line;
    let key = row.field(0).unwrap_or_default().trim();
    let name = row.field(1).unwrap_or_default().trim();

    if key.is_empty() || name.is_empty() {
        return Err(Error::EmptyField { line });
    }

    let id: RecordId = key.parse().map_err(|_| Error::InvalidKey {
        line,
        key: key.to_string(),
    })?;

    if !store.insert(id, name) {
        return Err(Error::DuplicateKey { line, key: id });
    }
    Ok(())
}

fn bad_row(err: &RowError) -> Error {
    Error::BadRow {
        line: err.line,
        reason: format!("{}: {}", err.kind, err.raw),
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================
