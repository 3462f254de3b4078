//! Error types for the roster core
//!
//! Errors never cross a public core operation: each operation turns the
//! error into one report (see [`Reporter::report_err`](crate::Reporter::report_err))
//! and returns its failure value. The variants still carry enough context
//! (path, line, key) to diagnose the problem from the log alone.

use crate::report::Severity;
use crate::types::RecordId;
use std::path::PathBuf;
use thiserror::Error;

/// Roster core errors
#[derive(Debug, Error)]
pub enum Error {
    /// Data file is missing
    #[error("the specified file does not exist at {}", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Reading or writing the data file failed
    #[error("could not access {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// A row has an empty key or name
    #[error("line {line}: one or more fields are empty")]
    EmptyField {
        /// 1-based line number
        line: usize,
    },

    /// Key column is not a base-10 integer
    #[error("line {line}: invalid key '{key}', must be an integer")]
    InvalidKey {
        /// 1-based line number
        line: usize,
        /// Trimmed key text as found
        key: String,
    },

    /// Key was already loaded from an earlier line
    #[error("line {line}: duplicate key {key} found")]
    DuplicateKey {
        /// 1-based line number
        line: usize,
        /// Key that collided
        key: RecordId,
    },

    /// Row could not be split into fields
    #[error("line {line}: bad data in row: {reason}")]
    BadRow {
        /// 1-based line number
        line: usize,
        /// Codec diagnosis
        reason: String,
    },

    /// A line held bytes that are not valid UTF-8
    #[error("line {line}: unreadable characters were replaced")]
    InvalidText {
        /// 1-based line number
        line: usize,
    },

    /// Store handle absent, or empty where records are required
    #[error("{0}, no data was found")]
    NoData(&'static str),

    /// Name is empty or whitespace-only
    #[error("{0}, the name must not be empty")]
    BlankName(&'static str),

    /// Rename target does not exist
    #[error("record {0} was not found")]
    NotFound(RecordId),

    /// Probing upward from the anchor ran past `i32::MAX`
    #[error("no free ID above {anchor}")]
    IdSpaceExhausted {
        /// Key the probe started from
        anchor: RecordId,
    },
}

/// Result type for roster core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Severity this error is reported at.
    ///
    /// Per-line and validation problems are warnings; I/O and allocation
    /// failures are errors.
    pub fn severity(&self) -> Severity {
        match self {
            Error::FileNotFound { .. } | Error::Io { .. } | Error::IdSpaceExhausted { .. } => {
                Severity::Error
            }
            Error::EmptyField { .. }
            | Error::InvalidKey { .. }
            | Error::DuplicateKey { .. }
            | Error::BadRow { .. }
            | Error::InvalidText { .. }
            | Error::NoData(_)
            | Error::BlankName(_)
            | Error::NotFound(_) => Severity::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_line_numbers() {
        let err = Error::InvalidKey {
            line: 3,
            key: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 3: invalid key 'abc', must be an integer");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_file_not_found_message() {
        let err = Error::FileNotFound {
            path: PathBuf::from("Data/staff.csv"),
        };
        assert_eq!(
            err.to_string(),
            "the specified file does not exist at Data/staff.csv"
        );
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn test_invalid_text_is_warning() {
        let err = Error::InvalidText { line: 7 };
        assert_eq!(err.to_string(), "line 7: unreadable characters were replaced");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            Error::NoData("unable to add a staff member").to_string(),
            "unable to add a staff member, no data was found"
        );
        assert_eq!(
            Error::BlankName("unable to rename record 4").to_string(),
            "unable to rename record 4, the name must not be empty"
        );
    }
}
