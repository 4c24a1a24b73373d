//! Command-line parsing.
//!
//! Options may appear anywhere; everything else is positional. The debug
//! categories come from `--debug=<list>`, then `CONDPATH_DEBUG`, then the
//! scan default.

use std::path::PathBuf;

use condpath_scan::{Cursor, DebugFlags, ScanConfig};

use crate::error::CliError;

/// Environment variable holding a default `--debug` list.
pub const DEBUG_ENV: &str = "CONDPATH_DEBUG";

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Help,
    Fold { file: PathBuf },
    Path { file: PathBuf, line: usize },
    Section { file: PathBuf, line: usize },
    Replay { file: PathBuf, cursors: Vec<Cursor> },
}

/// A parsed command line.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Invocation {
    pub command: Command,
    pub json: bool,
    pub config: ScanConfig,
}

/// Parse arguments (without the program name).
pub fn parse_args<S: AsRef<str>>(
    args: &[S],
    env_debug: Option<&str>,
) -> Result<Invocation, CliError> {
    let mut json = false;
    let mut debug = None;
    let mut positional = Vec::new();

    for arg in args.iter().map(AsRef::as_ref) {
        if arg == "--json" {
            json = true;
        } else if let Some(list) = arg.strip_prefix("--debug=") {
            debug = Some(DebugFlags::parse_list(list)?);
        } else if arg == "-h" || arg == "--help" {
            positional.clear();
            positional.push("help");
            break;
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else {
            positional.push(arg);
        }
    }

    let debug = match (debug, env_debug) {
        (Some(flags), _) => flags,
        (None, Some(list)) => DebugFlags::parse_list(list)?,
        (None, None) => ScanConfig::default().debug,
    };

    Ok(Invocation {
        command: parse_command(&positional)?,
        json,
        config: ScanConfig::with_debug(debug),
    })
}

fn parse_command(positional: &[&str]) -> Result<Command, CliError> {
    let command = match positional {
        [] | ["help"] => Command::Help,
        ["fold", file] => Command::Fold { file: PathBuf::from(*file) },
        ["path", file, line] => Command::Path {
            file: PathBuf::from(*file),
            line: parse_line(line)?,
        },
        ["section", file, line] => Command::Section {
            file: PathBuf::from(*file),
            line: parse_line(line)?,
        },
        ["replay", file, cursors @ ..] if !cursors.is_empty() => Command::Replay {
            file: PathBuf::from(*file),
            cursors: cursors
                .iter()
                .map(|c| parse_cursor(c))
                .collect::<Result<_, _>>()?,
        },
        [name @ ("fold" | "path" | "section" | "replay"), ..] => {
            return Err(CliError::Usage(format!("wrong arguments for '{name}'")));
        }
        [name, ..] => return Err(CliError::Usage(format!("unknown command '{name}'"))),
    };
    Ok(command)
}

fn parse_line(value: &str) -> Result<usize, CliError> {
    value.parse().map_err(|_| CliError::InvalidLine {
        value: value.to_owned(),
    })
}

/// `LINE` or `LINE:COLUMN`.
fn parse_cursor(value: &str) -> Result<Cursor, CliError> {
    match value.split_once(':') {
        Some((line, column)) => Ok(Cursor::new(parse_line(line)?, parse_line(column)?)),
        None => Ok(Cursor::new(parse_line(value)?, 0)),
    }
}

pub fn print_usage() {
    eprintln!("Usage: condpath <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  fold <file>                  Foldable conditional blocks");
    eprintln!("  path <file> <line>           Annotations and the active path at <line>");
    eprintln!("  section <file> <line>        Conditional section enclosing <line>");
    eprintln!("  replay <file> <line[:col]>...");
    eprintln!("                               Feed caret moves to the decorator, print each update");
    eprintln!("  help                         Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json                       Machine-readable output");
    eprintln!("  --debug=<list>               Log categories: folding, decorations, all, none");
    eprintln!();
    eprintln!("Lines and columns are zero-based. {DEBUG_ENV} sets a default --debug list;");
    eprintln!("RUST_LOG selects which events are printed (e.g. RUST_LOG=condpath=trace).");
}
