//! Shared helpers for the roster integration suite.

use staff_roster::{MemoryReporter, Roster, RosterBuilder};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A roster file in its own temporary directory
pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("MalinStaffNamesV3.csv");
        fs::write(&path, content).unwrap();
        Fixture { dir, path }
    }

    /// Fixture with no file written
    pub fn missing() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("MalinStaffNamesV3.csv");
        Fixture { dir, path }
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }

    pub fn open(&self) -> (Roster<Arc<MemoryReporter>>, Arc<MemoryReporter>) {
        self.open_with(RosterBuilder::new())
    }

    pub fn open_sorted(&self) -> (Roster<Arc<MemoryReporter>>, Arc<MemoryReporter>) {
        self.open_with(RosterBuilder::new().sorted())
    }

    fn open_with(&self, builder: RosterBuilder) -> (Roster<Arc<MemoryReporter>>, Arc<MemoryReporter>) {
        let reporter = Arc::new(MemoryReporter::new());
        let roster = builder.path(&self.path).open_with(reporter.clone()).unwrap();
        (roster, reporter)
    }
}
