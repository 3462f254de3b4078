//! Roster CLI: search and edit the staff names file.
//!
//! Three modes:
//! - **Shell mode**: `roster [flags] COMMAND` runs a single command; edits are saved
//! - **REPL mode**: `roster [flags]` opens an interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "add Frank" | roster` runs stdin line by line, saving at the end

mod commands;
mod format;
mod logging;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use staff_roster::{BackingOrder, RosterOptions};

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use logging::{setup_tracing, LogTarget};
use parse::{matches_to_action, CliAction};
use state::SessionState;

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let target = LogTarget::from_flags(
        matches.get_one::<String>("log-dir").map(String::as_str),
        matches.get_flag("log-stderr"),
    );
    setup_tracing(&target, matches.get_flag("verbose"));

    let mut state = match SessionState::open(options(&matches)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    if matches.subcommand().is_some() {
        let exit_code = run_shell_mode(&matches, &mut state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn options(matches: &clap::ArgMatches) -> RosterOptions {
    RosterOptions {
        data_path: matches.get_one::<String>("data").map(Into::into),
        ordering: if matches.get_flag("sorted") {
            BackingOrder::Sorted
        } else {
            BackingOrder::Insertion
        },
    }
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    let cmd = match matches_to_action(matches) {
        Ok(CliAction::Execute(cmd)) => cmd,
        Ok(CliAction::Meta(_)) => {
            eprintln!("(error) Meta-commands are only available in REPL mode");
            return 1;
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };

    let mutating = cmd.is_mutating();
    match state.execute(cmd) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            return 1;
        }
    }

    if mutating && state.is_dirty() {
        if let Err(e) = state.save() {
            eprintln!("{}", format_error(&e, mode));
            return 1;
        }
    }
    0
}
