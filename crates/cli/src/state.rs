//! REPL/shell session state.
//!
//! Wraps the open [`Roster`] and turns each [`RosterCommand`] into an
//! [`Output`] or a user-facing error message. Reports go to the tracing
//! log and are also buffered so the failure reason can be shown at the
//! prompt.

use std::error::Error as StdError;
use std::path::PathBuf;

use staff_roster::{
    MemoryReporter, Record, RecordId, Reporter, Roster, RosterBuilder, RosterOptions, Severity,
    TracingReporter,
};

use crate::parse::RosterCommand;

/// Reporter that logs through `tracing` and keeps a copy of each report.
#[derive(Debug, Default)]
pub struct SessionReporter {
    log: TracingReporter,
    recent: MemoryReporter,
}

impl Reporter for SessionReporter {
    fn report(&self, severity: Severity, message: &str, cause: Option<&dyn StdError>) {
        self.log.report(severity, message, cause);
        self.recent.report(severity, message, cause);
    }
}

impl SessionReporter {
    /// Most serious recent problem, as shown to the user
    fn last_problem(&self) -> Option<String> {
        self.recent
            .take()
            .into_iter()
            .rev()
            .find(|r| r.severity != Severity::Info)
            .map(|r| match r.cause {
                Some(cause) => format!("{}: {}", r.message, cause),
                None => r.message,
            })
    }

    fn clear(&self) {
        self.recent.take();
    }
}

/// Successful command results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Records(Vec<Record>),
    Record(Option<Record>),
    Added(Record),
    Renamed(Record),
    Deleted(RecordId),
    Saved(PathBuf),
}

/// Open roster plus the per-session bookkeeping of the front end.
pub struct SessionState {
    roster: Roster<SessionReporter>,
}

impl SessionState {
    /// Open the roster described by `options`.
    pub fn open(options: RosterOptions) -> Result<Self, String> {
        let roster = RosterBuilder::new()
            .options(options)
            .open_with(SessionReporter::default())
            .map_err(|e| format!("Failed to open roster: {}", e))?;
        roster.reporter().clear();
        Ok(SessionState { roster })
    }

    /// Roster file in use
    pub fn path(&self) -> PathBuf {
        self.roster.path().to_path_buf()
    }

    /// Check if there are unsaved edits
    pub fn is_dirty(&self) -> bool {
        self.roster.is_dirty()
    }

    /// Number of records loaded
    pub fn len(&self) -> usize {
        self.roster.store().len()
    }

    /// Load summary, if the file was missing or had rejected rows
    pub fn load_issues(&self) -> Option<String> {
        let load = self.roster.load_result();
        load.has_issues().then(|| load.summary())
    }

    /// Run one command.
    ///
    /// A failed search keeps the previous result list; `Err` carries the
    /// reason reported by the roster.
    pub fn execute(&mut self, cmd: RosterCommand) -> Result<Output, String> {
        self.roster.reporter().clear();
        match cmd {
            RosterCommand::Search { query } => {
                if self.roster.search(Some(&query)) {
                    Ok(Output::Records(self.roster.results().to_vec()))
                } else {
                    Err(self.failure("search failed"))
                }
            }
            RosterCommand::List => Ok(Output::Records(self.roster.list())),
            RosterCommand::Get { id } => Ok(Output::Record(self.roster.get(id))),
            RosterCommand::Add { name } => match self.roster.insert(&name) {
                Some(id) => Ok(Output::Added(self.record(id))),
                None => Err(self.failure("could not add the staff member")),
            },
            RosterCommand::Rename { id, name } => {
                if self.roster.rename(id, &name) {
                    Ok(Output::Renamed(self.record(id)))
                } else {
                    Err(self.failure("could not rename the staff member"))
                }
            }
            RosterCommand::Delete { id } => {
                if self.roster.delete(id) {
                    Ok(Output::Deleted(id))
                } else {
                    Err(self.failure("could not delete the staff member"))
                }
            }
            RosterCommand::Save => self.save(),
        }
    }

    /// Write the roster file.
    pub fn save(&mut self) -> Result<Output, String> {
        self.roster.reporter().clear();
        if self.roster.save() {
            Ok(Output::Saved(self.path()))
        } else {
            Err(self.failure("could not save the roster"))
        }
    }

    /// Last displayed result list
    #[cfg(test)]
    pub fn results(&self) -> &[Record] {
        self.roster.results()
    }

    /// Forget the displayed result list
    pub fn clear_results(&mut self) {
        self.roster.clear_results();
    }

    fn record(&self, id: RecordId) -> Record {
        self.roster
            .get(id)
            .unwrap_or_else(|| Record::new(id, String::new()))
    }

    fn failure(&self, fallback: &str) -> String {
        self.roster
            .reporter()
            .last_problem()
            .unwrap_or_else(|| fallback.to_string())
    }
}
