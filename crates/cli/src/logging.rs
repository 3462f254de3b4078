//! Tracing setup.
//!
//! Reports are appended to `logs/logfile.txt` beside the executable unless
//! `--log-dir` or `--log-stderr` say otherwise. `RUST_LOG` overrides the
//! default level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use staff_roster::{base_dir, LOG_DIR, LOG_FILE_NAME};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Where log output should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// Pick the log destination from the command-line flags
    pub fn from_flags(log_dir: Option<&str>, to_stderr: bool) -> Self {
        if to_stderr {
            return LogTarget::Stderr;
        }
        let dir = match log_dir {
            Some(dir) => PathBuf::from(dir),
            None => match base_dir() {
                Ok(base) => base.join(LOG_DIR),
                Err(_) => return LogTarget::Stderr,
            },
        };
        LogTarget::File(dir.join(LOG_FILE_NAME))
    }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Install the global subscriber.
///
/// Falls back to stderr if the log file cannot be opened.
pub fn setup_tracing(target: &LogTarget, verbose: bool) {
    if let LogTarget::File(path) = target {
        match open_log(path) {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true);

                tracing_subscriber::registry()
                    .with(filter(verbose))
                    .with(file_layer)
                    .init();

                tracing::debug!(path = ?path, "roster tracing initialized");
                return;
            }
            Err(e) => eprintln!("(warning) cannot open log file {}: {}", path.display(), e),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn open_log(path: &Path) -> std::io::Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
