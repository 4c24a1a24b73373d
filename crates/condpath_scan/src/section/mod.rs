//! Conditional section around a line, for "collapse this section" commands.
//!
//! The search is purely textual: back from the line to the nearest opening
//! or `#elif` directive, then forward to the first `#endif`. It does not
//! balance nesting, so the `#endif` found may belong to an inner block.

use condpath_lexer::{DirectiveKind, DirectiveScanner};
use serde::Serialize;

/// Inclusive, zero-based line span of a section.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Section {
    pub start_line: usize,
    pub end_line: usize,
}

/// Find the section enclosing `line`.
///
/// Lines past the end are clamped to the last line. Returns `None` when no
/// opening directive precedes the line or no `#endif` follows it.
pub fn enclosing_section<S: AsRef<str>>(lines: &[S], line: usize) -> Option<Section> {
    let from = line.min(lines.len().checked_sub(1)?);
    let start_line = (0..=from)
        .rev()
        .find(|&i| has_directive(lines[i].as_ref(), starts_section))?;
    let end_line = (start_line..lines.len())
        .find(|&i| has_directive(lines[i].as_ref(), |kind| kind == DirectiveKind::EndIf))?;
    Some(Section {
        start_line,
        end_line,
    })
}

fn starts_section(kind: DirectiveKind) -> bool {
    kind.is_open() || kind == DirectiveKind::ElseIf
}

fn has_directive(text: &str, wanted: impl Fn(DirectiveKind) -> bool) -> bool {
    DirectiveScanner::new(text).any(|found| wanted(found.directive.kind))
}
