//! Session options
//!
//! Defaults mirror the shipped layout: the roster file lives in a `Data`
//! folder next to the executable, and logs go to `logs/` beside it.

use crate::error::{Error, Result};
use roster_core::BackingOrder;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Folder under the base directory that holds the roster file
pub const DATA_DIR: &str = "Data";

/// Default roster file name
pub const DEFAULT_FILE_NAME: &str = "MalinStaffNamesV3.csv";

/// Folder under the base directory that holds the log file
pub const LOG_DIR: &str = "logs";

/// Log file name
pub const LOG_FILE_NAME: &str = "logfile.txt";

/// Directory containing the running executable
pub fn base_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(Error::BaseDir)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::BaseDir(io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        ))
    })
}

/// Where and how a session keeps its records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterOptions {
    /// Roster file; `None` means the default under the base directory
    pub data_path: Option<PathBuf>,
    /// Iteration order of the in-memory store
    pub ordering: BackingOrder,
}

impl RosterOptions {
    /// Options for an explicit roster file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        RosterOptions {
            data_path: Some(path.into()),
            ordering: BackingOrder::default(),
        }
    }

    /// Roster file this session reads and writes
    pub fn resolve_data_path(&self) -> Result<PathBuf> {
        match &self.data_path {
            Some(path) => Ok(path.clone()),
            None => Ok(default_data_path(&base_dir()?)),
        }
    }
}

/// Default roster file under `base`
pub fn default_data_path(base: &Path) -> PathBuf {
    base.join(DATA_DIR).join(DEFAULT_FILE_NAME)
}

/// Default log file under `base`
pub fn default_log_path(base: &Path) -> PathBuf {
    base.join(LOG_DIR).join(LOG_FILE_NAME)
}
