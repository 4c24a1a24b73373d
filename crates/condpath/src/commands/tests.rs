use std::path::Path;

use condpath_scan::{decorations, folding_ranges_in_text, Cursor, NeverCancel, ScanConfig, Section};
use pretty_assertions::assert_eq;
use serde_json::Value;

use super::*;

const NESTED: &str = "#ifdef A\na();\n#ifdef B\nb();\n#endif\n#endif\n";

fn json(text: &str) -> Value {
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => panic!("invalid JSON ({err}):\n{text}"),
    }
}

// === fold ===

#[test]
fn fold_text_lists_ranges() {
    let output =
        folding_ranges_in_text("#if A\na\n#else\nb\n#endif", &ScanConfig::quiet(), &NeverCancel)
            .unwrap();
    assert_eq!(fold::render(&output, false).unwrap(), "0..=1\n2..=4");
}

#[test]
fn fold_text_without_blocks() {
    let output = folding_ranges_in_text("int x;", &ScanConfig::quiet(), &NeverCancel).unwrap();
    assert_eq!(fold::render(&output, false).unwrap(), "no foldable blocks");
}

#[test]
fn fold_json_carries_diagnostics() {
    let output =
        folding_ranges_in_text("#ifdef A\nx", &ScanConfig::quiet(), &NeverCancel).unwrap();
    let value = json(&fold::render(&output, true).unwrap());
    assert_eq!(value["ranges"][0]["start_line"], 0);
    assert_eq!(value["ranges"][0]["end_line"], 1);
    assert_eq!(value["diagnostics"][0]["type"], "unterminated");
    assert_eq!(value["diagnostics"][0]["kind"], "ifdef");
}

// === path ===

#[test]
fn path_text_shows_hints_and_status() {
    let text = "#ifdef A\nx\n#endif";
    let set = decorations(text, 1, &ScanConfig::quiet());
    assert_eq!(
        path::render(text, &set, false).unwrap(),
        "    0 | #ifdef A <-- A  [blue]\n    2 | #endif <-- A  [blue]\n\nIFDEF Path: A"
    );
}

#[test]
fn path_text_without_directives() {
    let set = decorations("x", 0, &ScanConfig::quiet());
    assert_eq!(path::render("x", &set, false).unwrap(), "IFDEF Path: <None>");
}

#[test]
fn path_json() {
    let set = decorations(NESTED, 3, &ScanConfig::quiet());
    let value = json(&path::render(NESTED, &set, true).unwrap());
    assert_eq!(value["status"], "IFDEF Path: A->B");
    assert_eq!(value["active_path"], serde_json::json!(["A", "B"]));
    assert_eq!(value["annotations"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["annotations"][1]["label"], "B");
    assert_eq!(value["annotations"][1]["color"], "green");
    assert_eq!(value["diagnostics"], serde_json::json!([]));
}

// === section ===

#[test]
fn section_text_and_json() {
    let found = Some(Section {
        start_line: 1,
        end_line: 4,
    });
    assert_eq!(section::render(found, false).unwrap(), "1..=4");
    assert_eq!(
        section::render(None, false).unwrap(),
        "no enclosing conditional section"
    );
    assert_eq!(section::render(None, true).unwrap(), "null");
    assert_eq!(json(&section::render(found, true).unwrap())["end_line"], 4);
}

// === replay ===

#[test]
fn replay_suppresses_same_line_moves() {
    let cursors = [Cursor::new(3, 0), Cursor::new(3, 5), Cursor::new(1, 0)];
    let steps = replay::replay(NESTED, &cursors, ScanConfig::quiet());
    let summary: Vec<(bool, &str, usize)> = steps
        .iter()
        .map(|s| (s.scanned, s.status.as_str(), s.annotations))
        .collect();
    assert_eq!(
        summary,
        vec![
            (true, "IFDEF Path: A->B", 4),
            (false, "IFDEF Path: A->B", 0),
            (true, "IFDEF Path: A", 4),
        ]
    );

    let text = replay::render(&steps, false).unwrap();
    assert!(text.starts_with("      3:0  scanned     IFDEF Path: A->B  (4 annotations)"));
    assert!(text.contains("3:5  suppressed"));
}

// === read_file ===

#[test]
fn missing_file_is_reported_by_name() {
    let err = read_file(Path::new("no/such/file.c")).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert_eq!(err.to_string(), "cannot find file 'no/such/file.c'");
}
