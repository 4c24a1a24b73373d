use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages_name_the_directive() {
    let stray = ScanDiagnostic::Unmatched {
        line: 4,
        kind: DirectiveKind::EndIf,
    };
    assert_eq!(
        stray.to_string(),
        "line 4: #endif found without matching opening directive"
    );
    assert_eq!(stray.line(), 4);

    let open = ScanDiagnostic::Unterminated {
        line: 0,
        kind: DirectiveKind::ElseIf,
    };
    assert_eq!(open.to_string(), "line 0: #elif is never closed");
    assert_eq!(open.line(), 0);
}
