//! `condpath replay <file> <line[:col]>...`
//!
//! Drives a [`PathDecorator`] with a sequence of caret moves, the way an
//! editor would, and prints what the host was asked to show after each.

use std::path::Path;

use condpath_scan::{Annotation, Cursor, DecorationHost, HostEvent, PathDecorator, ScanConfig};
use serde::Serialize;

use super::{read_file, to_json};
use crate::error::CliError;

/// Host that keeps the latest bands and status in memory.
#[derive(Default)]
struct SnapshotHost {
    bands: Vec<Vec<Annotation>>,
    status: String,
}

impl SnapshotHost {
    fn shown(&self) -> usize {
        self.bands.iter().map(Vec::len).sum()
    }
}

impl DecorationHost for SnapshotHost {
    fn set_band(&mut self, band: usize, annotations: &[Annotation]) {
        if self.bands.len() <= band {
            self.bands.resize(band + 1, Vec::new());
        }
        self.bands[band] = annotations.to_vec();
    }

    fn set_status(&mut self, text: &str) {
        text.clone_into(&mut self.status);
    }

    fn release(&mut self) {
        tracing::debug!(bands = self.bands.len(), "releasing snapshot host");
        self.bands.clear();
    }
}

/// Host state after one caret move.
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub(super) struct ReplayStep {
    pub line: usize,
    pub column: usize,
    pub scanned: bool,
    pub status: String,
    pub annotations: usize,
}

pub(super) fn run(
    file: &Path,
    cursors: &[Cursor],
    config: &ScanConfig,
    json: bool,
) -> Result<(), CliError> {
    let text = read_file(file)?;
    let steps = replay(&text, cursors, *config);
    println!("{}", render(&steps, json)?);
    Ok(())
}

/// Open the buffer at the first cursor, then move through the rest.
pub(super) fn replay(text: &str, cursors: &[Cursor], config: ScanConfig) -> Vec<ReplayStep> {
    let mut decorator = PathDecorator::new(SnapshotHost::default(), config);
    cursors
        .iter()
        .enumerate()
        .map(|(i, &cursor)| {
            let event = if i == 0 {
                HostEvent::BufferOpened
            } else {
                HostEvent::SelectionMoved
            };
            let scanned = decorator.handle(event, text, cursor);
            let host = decorator.host();
            ReplayStep {
                line: cursor.line,
                column: cursor.column,
                scanned,
                status: host.status.clone(),
                annotations: host.shown(),
            }
        })
        .collect()
}

pub(super) fn render(steps: &[ReplayStep], json: bool) -> Result<String, CliError> {
    if json {
        return to_json(steps);
    }
    let lines: Vec<String> = steps
        .iter()
        .map(|step| {
            let at = format!("{}:{}", step.line, step.column);
            let what = if step.scanned { "scanned" } else { "suppressed" };
            format!(
                "{at:>9}  {what:<10}  {}  ({} annotations)",
                step.status, step.annotations
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
