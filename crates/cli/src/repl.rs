//! Interactive REPL and pipe mode.

use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::build_cli;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

const PROMPT: &str = "roster> ";

/// What the loop should do after a line
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the interactive prompt until `close`, `quit` or end of input.
///
/// End of input (Ctrl-D) behaves like `close`: the roster is saved.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize line editor: {}", e);
            return;
        }
    };

    println!(
        "{} records loaded from {}. Type 'help' for commands.",
        state.len(),
        state.path().display()
    );
    if let Some(issues) = state.load_issues() {
        eprintln!("(warning) {}; see the log for details", issues);
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                if handle_line(state, &line, mode, true) == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                close(state, mode);
                break;
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }
}

/// Run commands read line by line from stdin.
///
/// Saves at end of input if anything changed. Returns the process exit code:
/// non-zero if any line failed.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let mut failed = false;
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{}", format_error(&e.to_string(), mode));
                failed = true;
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match check_meta_command(trimmed) {
            Some(MetaCommand::Quit) => return i32::from(failed),
            Some(MetaCommand::Close) => break,
            Some(_) => continue,
            None => {}
        }
        match run_command(state, trimmed) {
            Ok(out) => print_output(&out, mode),
            Err(msg) => {
                eprintln!("{}", format_error(&msg, mode));
                failed = true;
            }
        }
    }

    if state.is_dirty() {
        if let Err(msg) = state.save() {
            eprintln!("{}", format_error(&msg, mode));
            failed = true;
        }
    }
    i32::from(failed)
}

fn handle_line(state: &mut SessionState, line: &str, mode: OutputMode, interactive: bool) -> Flow {
    if let Some(meta) = check_meta_command(line) {
        return handle_meta(state, meta, mode, interactive);
    }
    match run_command(state, line) {
        Ok(out) => print_output(&out, mode),
        Err(msg) => eprintln!("{}", format_error(&msg, mode)),
    }
    Flow::Continue
}

fn handle_meta(state: &mut SessionState, meta: MetaCommand, mode: OutputMode, interactive: bool) -> Flow {
    match meta {
        MetaCommand::Help { command } => {
            print_help(command.as_deref());
            Flow::Continue
        }
        MetaCommand::Clear => {
            state.clear_results();
            if interactive {
                print!("\x1b[2J\x1b[H");
            }
            Flow::Continue
        }
        MetaCommand::Close => {
            close(state, mode);
            Flow::Exit
        }
        MetaCommand::Quit => {
            if state.is_dirty() {
                eprintln!("(warning) unsaved changes were discarded");
            }
            Flow::Exit
        }
    }
}

fn close(state: &mut SessionState, mode: OutputMode) {
    match state.save() {
        Ok(out) => print_output(&out, mode),
        Err(msg) => eprintln!("{}", format_error(&msg, mode)),
    }
}

/// Parse one line with the shell grammar and run it.
fn run_command(state: &mut SessionState, line: &str) -> Result<crate::state::Output, String> {
    let words = shlex::split(line).ok_or_else(|| "Unbalanced quotes".to_string())?;
    let argv = std::iter::once("roster".to_string()).chain(words);
    let matches = build_cli()
        .try_get_matches_from(argv)
        .map_err(|e| e.to_string().trim_end().to_string())?;

    match matches_to_action(&matches)? {
        CliAction::Execute(cmd) => state.execute(cmd),
        CliAction::Meta(_) => Err("Meta-commands are not accepted here".to_string()),
    }
}

fn print_output(output: &crate::state::Output, mode: OutputMode) {
    let formatted = format_output(output, mode);
    if !formatted.is_empty() {
        println!("{}", formatted);
    }
}

fn print_help(command: Option<&str>) {
    let mut cli = build_cli();
    match command.and_then(|name| cli.find_subcommand_mut(name)) {
        Some(sub) => {
            let _ = sub.print_help();
        }
        None => {
            println!("Commands:");
            println!("  search <text>         ids starting with digits, or names containing text");
            println!("  list                  every staff member");
            println!("  get <id>              one staff member");
            println!("  add <name>            add under a new id");
            println!("  rename <id> <name>    change a name");
            println!("  delete <id>           remove a staff member");
            println!("  save                  write the roster file");
            println!("Meta-commands:");
            println!("  help [command]        this text, or help for one command");
            println!("  clear                 clear the screen and the result list");
            println!("  close                 save and exit");
            println!("  quit | exit           exit without saving");
        }
    }
}
