use super::*;
use pretty_assertions::assert_eq;

fn kind_of(line: &str) -> Option<DirectiveKind> {
    classify_line(line).map(|d| d.kind)
}

// === Keyword Classification ===

#[test]
fn classifies_every_spelling() {
    assert_eq!(kind_of("#if FOO"), Some(DirectiveKind::If));
    assert_eq!(kind_of("#ifdef FOO"), Some(DirectiveKind::IfDef));
    assert_eq!(kind_of("#ifndef FOO"), Some(DirectiveKind::IfNDef));
    assert_eq!(kind_of("#elif FOO"), Some(DirectiveKind::ElseIf));
    assert_eq!(kind_of("#elseif FOO"), Some(DirectiveKind::ElseIf));
    assert_eq!(kind_of("#else"), Some(DirectiveKind::Else));
    assert_eq!(kind_of("#endif"), Some(DirectiveKind::EndIf));
}

#[test]
fn longer_spelling_wins() {
    let d = classify_line("#ifdef X");
    assert_eq!(d.map(|d| d.keyword), Some("ifdef"));

    let d = classify_line("#elseif X");
    assert_eq!(d.map(|d| (d.keyword, d.condition)), Some(("elseif", " X")));
}

#[test]
fn keyword_has_no_word_boundary() {
    let d = classify_line("#iffy");
    assert_eq!(d.map(|d| (d.kind, d.condition)), Some((DirectiveKind::If, "fy")));
    assert_eq!(kind_of("#elsewhere"), Some(DirectiveKind::Else));
}

#[test]
fn other_preprocessor_lines_are_not_directives() {
    assert_eq!(kind_of("#include <stdio.h>"), None);
    assert_eq!(kind_of("#define FOO 1"), None);
    assert_eq!(kind_of("#pragma once"), None);
    assert_eq!(kind_of("# if FOO"), None);
    assert_eq!(kind_of("int x; #if FOO"), None);
    assert_eq!(kind_of(""), None);
}

#[test]
fn leading_and_trailing_whitespace_is_ignored() {
    let d = classify_line("   \t#ifdef  DEBUG  \r");
    assert_eq!(
        d,
        Some(Directive {
            kind: DirectiveKind::IfDef,
            keyword: "ifdef",
            condition: "  DEBUG",
        })
    );
}

// === Kind Helpers ===

#[test]
fn kind_families() {
    assert!(DirectiveKind::If.is_open());
    assert!(DirectiveKind::IfNDef.is_open());
    assert!(!DirectiveKind::ElseIf.is_open());
    assert!(DirectiveKind::ElseIf.is_branch());
    assert!(DirectiveKind::Else.is_branch());
    assert!(!DirectiveKind::EndIf.is_branch());
}

#[test]
fn display_uses_canonical_spelling() {
    assert_eq!(DirectiveKind::ElseIf.to_string(), "#elif");
    assert_eq!(DirectiveKind::IfNDef.to_string(), "#ifndef");
}

// === Comment Lines ===

#[test]
fn comment_lines() {
    assert!(is_comment_line("// #ifdef FOO"));
    assert!(is_comment_line("   /* #endif */"));
    assert!(!is_comment_line("#endif // FOO"));
    assert!(!is_comment_line(" * #if inside a block comment"));
}
