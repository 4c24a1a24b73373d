//! Directive keyword classification.
//!
//! One classifier serves both scanners. Keywords are matched by prefix in a
//! fixed order, so the longer spellings win over their prefixes (`ifdef`
//! before `if`, `elseif` before `else`). There is no word-boundary check:
//! `#iffy` classifies as `#if` with condition text `fy`.

use std::fmt;

use serde::Serialize;

/// Kind of conditional-compilation directive.
///
/// `#elif` and `#elseif` are two spellings of [`DirectiveKind::ElseIf`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    If,
    IfDef,
    IfNDef,
    ElseIf,
    Else,
    EndIf,
}

/// Recognized spellings, in match order.
const KEYWORDS: [(&str, DirectiveKind); 7] = [
    ("ifdef", DirectiveKind::IfDef),
    ("ifndef", DirectiveKind::IfNDef),
    ("if", DirectiveKind::If),
    ("elseif", DirectiveKind::ElseIf),
    ("elif", DirectiveKind::ElseIf),
    ("else", DirectiveKind::Else),
    ("endif", DirectiveKind::EndIf),
];

impl DirectiveKind {
    /// `#if`, `#ifdef` or `#ifndef`: starts a new block.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Self::If | Self::IfDef | Self::IfNDef)
    }

    /// `#elif`/`#elseif` or `#else`: ends one branch and starts the next.
    #[inline]
    pub fn is_branch(self) -> bool {
        matches!(self, Self::ElseIf | Self::Else)
    }

    /// Canonical spelling without the leading `#`.
    pub fn name(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::IfDef => "ifdef",
            Self::IfNDef => "ifndef",
            Self::ElseIf => "elif",
            Self::Else => "else",
            Self::EndIf => "endif",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.name())
    }
}

/// A classified directive: its kind, the spelling that matched, and the
/// raw condition text that follows the keyword.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Directive<'a> {
    pub kind: DirectiveKind,
    /// Keyword as written (`elseif` vs `elif`).
    pub keyword: &'a str,
    /// Everything after the keyword up to the end of the line, untrimmed.
    pub condition: &'a str,
}

/// Match a keyword at the start of `rest`, the text right after a `#`.
///
/// Returns the kind and the byte length of the matched keyword.
pub(crate) fn match_keyword(rest: &str) -> Option<(DirectiveKind, usize)> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| rest.starts_with(spelling))
        .map(|&(spelling, kind)| (kind, spelling.len()))
}

/// Classify one line, anchored at its first non-whitespace character.
///
/// Returns `None` for anything that is not a conditional directive,
/// including `#include`, `#define` and lines where `#` is preceded by code.
pub fn classify_line(line: &str) -> Option<Directive<'_>> {
    let rest = line.trim().strip_prefix('#')?;
    let (kind, len) = match_keyword(rest)?;
    Some(Directive {
        kind,
        keyword: &rest[..len],
        condition: &rest[len..],
    })
}

/// Whether a line is a full-line comment (`//` or `/*` after trimming).
///
/// Only the line start is inspected; a directive inside a multi-line
/// `/* ... */` block is not detected as commented out.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}

#[cfg(test)]
mod tests;
