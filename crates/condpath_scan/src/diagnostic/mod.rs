//! Non-fatal reports about malformed conditional structure.

use condpath_lexer::DirectiveKind;
use serde::Serialize;

/// Malformed input noticed during a scan.
///
/// Scans never fail on these; they are collected next to the best-effort
/// output and logged when the scan's debug category is enabled.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Serialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScanDiagnostic {
    /// A branch or `#endif` with no open block. Ignored.
    #[error("line {line}: {kind} found without matching opening directive")]
    Unmatched { line: usize, kind: DirectiveKind },
    /// An opening (or branch) directive still open at end of buffer.
    /// Closed at the last line.
    #[error("line {line}: {kind} is never closed")]
    Unterminated { line: usize, kind: DirectiveKind },
}

impl ScanDiagnostic {
    /// Zero-based line of the offending directive.
    pub fn line(&self) -> usize {
        match *self {
            Self::Unmatched { line, .. } | Self::Unterminated { line, .. } => line,
        }
    }
}

#[cfg(test)]
mod tests;
