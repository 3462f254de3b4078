//! Clap command tree.
//!
//! The same tree serves shell mode (`roster add Frank`) and each REPL line.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the top-level command with global flags and roster subcommands.
pub fn build_cli() -> Command {
    Command::new("roster")
        .about("Staff roster: search and edit the staff names file")
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .value_name("PATH")
                .global(true)
                .help("Roster file (default: Data/MalinStaffNamesV3.csv next to the executable)"),
        )
        .arg(
            Arg::new("sorted")
                .long("sorted")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Keep records sorted by id instead of file order"),
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .value_name("DIR")
                .global(true)
                .help("Directory for logfile.txt (default: logs/ next to the executable)"),
        )
        .arg(
            Arg::new("log-stderr")
                .long("log-stderr")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Log to stderr instead of the log file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Log at debug level"),
        )
        .subcommand(
            Command::new("search")
                .about("Find staff by id prefix or name")
                .arg(
                    Arg::new("query")
                        .num_args(0..)
                        .allow_hyphen_values(true)
                        .help("Digits match ids starting with them; other text matches names"),
                ),
        )
        .subcommand(Command::new("list").about("Show every staff member"))
        .subcommand(
            Command::new("get")
                .about("Show one staff member")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("add")
                .about("Add a staff member under a new id")
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("rename")
                .about("Change a staff member's name")
                .arg(id_arg())
                .arg(name_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Remove a staff member")
                .arg(id_arg()),
        )
        .subcommand(Command::new("save").about("Write the roster file"))
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i32))
        .help("Staff id")
}

fn name_arg() -> Arg {
    Arg::new("name")
        .required(true)
        .num_args(1..)
        .help("Staff name (words are joined with spaces)")
}
