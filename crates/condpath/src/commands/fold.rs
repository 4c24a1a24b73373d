//! `condpath fold <file>`

use std::path::Path;

use condpath_scan::{folding_ranges_in_text, FoldingOutput, NeverCancel, ScanConfig};

use super::{read_file, to_json, warn_all};
use crate::error::CliError;

pub(super) fn run(file: &Path, config: &ScanConfig, json: bool) -> Result<(), CliError> {
    let text = read_file(file)?;
    let output = folding_ranges_in_text(&text, config, &NeverCancel)?;
    println!("{}", render(&output, json)?);
    if !json {
        warn_all(&output.diagnostics);
    }
    Ok(())
}

/// One `start..=end` line per range, in completion order.
pub(super) fn render(output: &FoldingOutput, json: bool) -> Result<String, CliError> {
    if json {
        return to_json(output);
    }
    if output.ranges.is_empty() {
        return Ok("no foldable blocks".to_owned());
    }
    let lines: Vec<String> = output
        .ranges
        .iter()
        .map(|range| format!("{}..={}", range.start_line, range.end_line))
        .collect();
    Ok(lines.join("\n"))
}
