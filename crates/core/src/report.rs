//! Reporting sink consumed by the core
//!
//! Every validation failure, I/O failure and success notification in the
//! core produces exactly one call to [`Reporter::report`]. The sink is an
//! explicit value handed to each component at construction; there is no
//! process-wide logger.
//!
//! Two sinks ship with the crate:
//! - [`TracingReporter`]: forwards to `tracing` (production)
//! - [`MemoryReporter`]: buffers reports for inspection (tests, collaborators
//!   that want to show the last message to a user)

use crate::error::Error;
use parking_lot::Mutex;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Severity of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Success notification or progress
    Info,
    /// Recoverable validation problem
    Warning,
    /// I/O failure or unexpected fault
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// One buffered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Rendered underlying cause, if any
    pub cause: Option<String>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "[{}] {} ({})", self.severity, self.message, cause),
            None => write!(f, "[{}] {}", self.severity, self.message),
        }
    }
}

/// Destination for diagnostics and notifications.
///
/// Implementations must tolerate calls from any thread.
pub trait Reporter: Send + Sync {
    /// Deliver one report
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn StdError>);

    /// Report an informational message
    fn info(&self, message: &str) {
        self.report(Severity::Info, message, None);
    }

    /// Report a warning
    fn warn(&self, message: &str) {
        self.report(Severity::Warning, message, None);
    }

    /// Report an error with an optional cause
    fn error(&self, message: &str, cause: Option<&dyn StdError>) {
        self.report(Severity::Error, message, cause);
    }

    /// Report a core error at its own severity, with its source as the cause
    fn report_err(&self, err: &Error) {
        self.report(err.severity(), &err.to_string(), err.source());
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn StdError>) {
        (**self).report(severity, message, cause)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn StdError>) {
        (**self).report(severity, message, cause)
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn StdError>) {
        (**self).report(severity, message, cause)
    }
}

/// Reporter that emits `tracing` events under the `roster` target.
///
/// Where the events end up (file, stderr, nowhere) is decided by whichever
/// subscriber the binary installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn StdError>) {
        match (severity, cause) {
            (Severity::Info, None) => tracing::info!(target: "roster", "{}", message),
            (Severity::Info, Some(cause)) => {
                tracing::info!(target: "roster", cause = %cause, "{}", message)
            }
            (Severity::Warning, None) => tracing::warn!(target: "roster", "{}", message),
            (Severity::Warning, Some(cause)) => {
                tracing::warn!(target: "roster", cause = %cause, "{}", message)
            }
            (Severity::Error, None) => tracing::error!(target: "roster", "{}", message),
            (Severity::Error, Some(cause)) => {
                tracing::error!(target: "roster", cause = %cause, "{}", message)
            }
        }
    }
}

/// Reporter that keeps every report in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

impl MemoryReporter {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all reports so far, oldest first
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Drain the buffer
    pub fn take(&self) -> Vec<Report> {
        std::mem::take(&mut *self.reports.lock())
    }

    /// Number of buffered reports
    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    /// Check if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of reports at `severity`
    pub fn count(&self, severity: Severity) -> usize {
        self.reports
            .lock()
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Messages of reports at `severity`, oldest first
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.reports
            .lock()
            .iter()
            .filter(|r| r.severity == severity)
            .map(|r| r.message.clone())
            .collect()
    }

    /// Most recent report
    pub fn last(&self) -> Option<Report> {
        self.reports.lock().last().cloned()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn StdError>) {
        self.reports.lock().push(Report {
            severity,
            message: message.to_string(),
            cause: cause.map(|c| c.to_string()),
        });
    }
}
