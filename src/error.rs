//! Error type for the session facade.
//!
//! Roster operations themselves never fail: they report and return an
//! outcome. Errors here cover setting a session up, before any file is
//! touched.

use std::io;
use thiserror::Error;

/// All session setup errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory holding the running executable could not be found
    #[error("could not locate the application directory: {0}")]
    BaseDir(#[source] io::Error),
}

/// Result type for session setup.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_base_dir_message_and_source() {
        let err = Error::BaseDir(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(
            err.to_string(),
            "could not locate the application directory: gone"
        );
        assert!(err.source().is_some());
    }
}
