//! Command handlers.
//!
//! Each handler reads the file, runs one scan and prints the result on
//! stdout. Scan diagnostics go to stderr as warnings in text mode and are
//! part of the document in JSON mode.

use std::path::Path;

use condpath_scan::ScanDiagnostic;
use serde::Serialize;

use crate::args::{print_usage, Command, Invocation};
use crate::error::CliError;

mod fold;
mod path;
mod replay;
mod section;

pub fn run(invocation: &Invocation) -> Result<(), CliError> {
    let config = &invocation.config;
    let json = invocation.json;
    match &invocation.command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Fold { file } => fold::run(file, config, json),
        Command::Path { file, line } => path::run(file, *line, config, json),
        Command::Section { file, line } => section::run(file, *line, json),
        Command::Replay { file, cursors } => replay::run(file, cursors, config, json),
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn warn_all(diagnostics: &[ScanDiagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("warning: {diagnostic}");
    }
}

#[cfg(test)]
mod tests;
