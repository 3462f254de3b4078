//! ArgMatches → RosterCommand/MetaCommand conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Roster commands → `CliAction::Execute(RosterCommand)`
//! - REPL meta-commands → `CliAction::Meta`

use clap::ArgMatches;
use staff_roster::RecordId;

/// The result of parsing user input.
#[allow(dead_code)]
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// A roster command to run against the session.
    Execute(RosterCommand),
    /// A REPL-only meta-command.
    Meta(MetaCommand),
}

/// Operations on the open roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterCommand {
    Search { query: String },
    List,
    Get { id: RecordId },
    Add { name: String },
    Rename { id: RecordId, name: String },
    Delete { id: RecordId },
    Save,
}

impl RosterCommand {
    /// Check if the command edits the store
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            RosterCommand::Add { .. } | RosterCommand::Rename { .. } | RosterCommand::Delete { .. }
        )
    }
}

/// REPL meta-commands.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Clear,
    /// Save, then leave
    Close,
    /// Leave without saving
    Quit,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "close" => Some(MetaCommand::Close),
        "clear" => Some(MetaCommand::Clear),
        "help" => {
            let command = parts
                .next()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let command = match sub_name {
        "search" => RosterCommand::Search {
            query: joined(sub_matches, "query").unwrap_or_default(),
        },
        "list" => RosterCommand::List,
        "get" => RosterCommand::Get {
            id: id(sub_matches)?,
        },
        "add" => RosterCommand::Add {
            name: joined(sub_matches, "name").ok_or("Missing name")?,
        },
        "rename" => RosterCommand::Rename {
            id: id(sub_matches)?,
            name: joined(sub_matches, "name").ok_or("Missing name")?,
        },
        "delete" => RosterCommand::Delete {
            id: id(sub_matches)?,
        },
        "save" => RosterCommand::Save,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(CliAction::Execute(command))
}

fn id(matches: &ArgMatches) -> Result<RecordId, String> {
    matches
        .get_one::<RecordId>("id")
        .copied()
        .ok_or_else(|| "Missing id".to_string())
}

fn joined(matches: &ArgMatches, name: &str) -> Option<String> {
    matches
        .get_many::<String>(name)
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
}
