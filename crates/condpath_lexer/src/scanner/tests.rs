use super::*;
use crate::DirectiveKind;
use pretty_assertions::assert_eq;

/// Helper: scan a buffer and collect `(offset, kind, condition)` triples.
fn scan(text: &str) -> Vec<(usize, DirectiveKind, &str)> {
    DirectiveScanner::new(text)
        .map(|m| (m.offset, m.directive.kind, m.directive.condition))
        .collect()
}

#[test]
fn empty_buffer() {
    assert!(scan("").is_empty());
    assert!(scan("int main() { return 0; }\n").is_empty());
}

#[test]
fn finds_directives_in_document_order() {
    let text = "#ifdef A\nx\n#elif B\n#else\n#endif\n";
    assert_eq!(
        scan(text),
        vec![
            (0, DirectiveKind::IfDef, " A"),
            (11, DirectiveKind::ElseIf, " B"),
            (19, DirectiveKind::Else, ""),
            (25, DirectiveKind::EndIf, ""),
        ]
    );
}

#[test]
fn matches_anywhere_on_a_line() {
    let text = "  int x; #if FOO\n";
    assert_eq!(scan(text), vec![(9, DirectiveKind::If, " FOO")]);
}

#[test]
fn condition_stops_at_carriage_return() {
    let text = "#if A\r\n#endif\r\n";
    assert_eq!(
        scan(text),
        vec![(0, DirectiveKind::If, " A"), (7, DirectiveKind::EndIf, "")]
    );
}

#[test]
fn rest_of_line_is_consumed_by_a_match() {
    // The `#endif` lives in the condition text of the `#if`.
    let text = "#if A // see #endif below\n";
    assert_eq!(
        scan(text),
        vec![(0, DirectiveKind::If, " A // see #endif below")]
    );
}

#[test]
fn skips_hashes_that_are_not_directives() {
    let text = "#include <a.h>\n#define X #x\n##if\n";
    assert_eq!(scan(text), vec![(29, DirectiveKind::If, "")]);
}

#[test]
fn non_ascii_text_around_directives() {
    let text = "// naïve café\n#ifdef ÜBER\n#endif";
    let found = scan(text);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].2, " ÜBER");
    assert_eq!(&text[found[1].0..], "#endif");
}

#[test]
fn keyword_at_end_of_buffer() {
    assert_eq!(scan("#endif"), vec![(0, DirectiveKind::EndIf, "")]);
    assert!(scan("#").is_empty());
}
