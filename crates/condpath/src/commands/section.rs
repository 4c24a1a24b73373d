//! `condpath section <file> <line>`

use std::path::Path;

use condpath_scan::{enclosing_section, Section};

use super::{read_file, to_json};
use crate::error::CliError;

pub(super) fn run(file: &Path, line: usize, json: bool) -> Result<(), CliError> {
    let text = read_file(file)?;
    let lines: Vec<&str> = text.lines().collect();
    println!("{}", render(enclosing_section(&lines, line), json)?);
    Ok(())
}

pub(super) fn render(section: Option<Section>, json: bool) -> Result<String, CliError> {
    if json {
        return to_json(&section);
    }
    Ok(match section {
        Some(section) => format!("{}..={}", section.start_line, section.end_line),
        None => "no enclosing conditional section".to_owned(),
    })
}
