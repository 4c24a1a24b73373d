//! `condpath path <file> <line>`
//!
//! Prints every annotated directive with its end-of-line hint, then the
//! status text for `<line>`.

use std::path::Path;

use condpath_lexer::LineIndex;
use condpath_scan::{decorations, ActivePath, DecorationSet, ScanConfig, ScanDiagnostic};
use serde::Serialize;

use super::{read_file, to_json, warn_all};
use crate::error::CliError;

/// JSON shape of the `path` command.
#[derive(Serialize)]
struct PathReport<'a> {
    status: String,
    active_path: &'a ActivePath,
    annotations: Vec<AnnotationView<'a>>,
    diagnostics: &'a [ScanDiagnostic],
}

#[derive(Serialize)]
struct AnnotationView<'a> {
    line: usize,
    band: usize,
    color: &'static str,
    label: &'a str,
}

pub(super) fn run(
    file: &Path,
    line: usize,
    config: &ScanConfig,
    json: bool,
) -> Result<(), CliError> {
    let text = read_file(file)?;
    let set = decorations(&text, line, config);
    println!("{}", render(&text, &set, json)?);
    if !json {
        warn_all(&set.diagnostics);
    }
    Ok(())
}

pub(super) fn render(text: &str, set: &DecorationSet, json: bool) -> Result<String, CliError> {
    let annotations = set.annotations();
    if json {
        let report = PathReport {
            status: set.status_text(),
            active_path: &set.active_path,
            annotations: annotations
                .iter()
                .map(|a| AnnotationView {
                    line: a.line,
                    band: a.band,
                    color: a.color(),
                    label: &a.label,
                })
                .collect(),
            diagnostics: &set.diagnostics,
        };
        return to_json(&report);
    }

    let index = LineIndex::new(text);
    let mut out: Vec<String> = annotations
        .iter()
        .map(|a| {
            let source = index.line_text(a.line).unwrap_or_default().trim_end();
            format!("{:>5} | {source}{}  [{}]", a.line, a.rendered(), a.color())
        })
        .collect();
    if !out.is_empty() {
        out.push(String::new());
    }
    out.push(set.status_text());
    Ok(out.join("\n"))
}
