//! Foldable line ranges for conditional blocks.
//!
//! A single forward pass over lines with a stack of open directives. Only
//! lines whose trimmed text starts with a directive count. A branch
//! (`#elif`/`#elseif`/`#else`) closes the running block one line above
//! itself and opens a new block, so every branch folds on its own.
//!
//! ```text
//! 0  #if A          ┐ 0..=1
//! 1    a();         ┘
//! 2  #else          ┐ 2..=4
//! 3    b();         │
//! 4  #endif         ┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use condpath_lexer::{classify_line, DirectiveKind, LineIndex};
use serde::Serialize;
use smallvec::SmallVec;

use crate::{ScanConfig, ScanDiagnostic};

/// Inclusive, zero-based line range of one foldable block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct FoldRange {
    pub start_line: usize,
    pub end_line: usize,
}

impl FoldRange {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains(&self, other: &FoldRange) -> bool {
        self.start_line <= other.start_line && other.end_line <= self.end_line
    }
}

/// Result of a completed folding scan.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize)]
pub struct FoldingOutput {
    /// Ranges in the order they were completed.
    pub ranges: Vec<FoldRange>,
    pub diagnostics: Vec<ScanDiagnostic>,
}

/// Cooperative cancellation signal, polled before each line.
pub trait CancellationToken {
    fn is_cancelled(&self) -> bool;
}

/// Token for callers that never cancel.
#[derive(Copy, Clone, Default, Debug)]
pub struct NeverCancel;

impl CancellationToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancellationToken for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// The folding scan was cancelled; no ranges are returned.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("folding scan cancelled before line {line}")]
pub struct Cancelled {
    /// First line that was not scanned.
    pub line: usize,
}

/// A directive still waiting for its branch or `#endif`.
#[derive(Copy, Clone, Debug)]
struct OpenBlock {
    start_line: usize,
    kind: DirectiveKind,
}

/// Compute fold ranges for a line sequence.
///
/// Unmatched branches and `#endif`s are ignored; blocks still open at the
/// end are closed at the last line. Both are reported as diagnostics.
#[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
pub fn folding_ranges<S, C>(
    lines: &[S],
    config: &ScanConfig,
    cancel: &C,
) -> Result<FoldingOutput, Cancelled>
where
    S: AsRef<str>,
    C: CancellationToken + ?Sized,
{
    let mut output = FoldingOutput::default();
    let mut stack: SmallVec<[OpenBlock; 8]> = SmallVec::new();

    for (line, text) in lines.iter().enumerate() {
        if cancel.is_cancelled() {
            tracing::debug!(line, "folding scan cancelled");
            return Err(Cancelled { line });
        }
        let Some(directive) = classify_line(text.as_ref()) else {
            continue;
        };
        let kind = directive.kind;
        log_if!(config, folding, trace, line, keyword = directive.keyword, "directive");

        match kind {
            DirectiveKind::If | DirectiveKind::IfDef | DirectiveKind::IfNDef => {
                stack.push(OpenBlock {
                    start_line: line,
                    kind,
                });
            }
            DirectiveKind::ElseIf | DirectiveKind::Else => {
                let Some(open) = stack.pop() else {
                    report(config, &mut output, ScanDiagnostic::Unmatched { line, kind });
                    continue;
                };
                // `open.start_line < line`, so this cannot underflow.
                emit(config, &mut output, FoldRange::new(open.start_line, line - 1));
                stack.push(OpenBlock {
                    start_line: line,
                    kind,
                });
            }
            DirectiveKind::EndIf => {
                let Some(open) = stack.pop() else {
                    report(config, &mut output, ScanDiagnostic::Unmatched { line, kind });
                    continue;
                };
                emit(config, &mut output, FoldRange::new(open.start_line, line));
            }
        }
        log_if!(config, folding, trace, depth = stack.len(), "stack");
    }

    let last_line = lines.len().saturating_sub(1);
    while let Some(open) = stack.pop() {
        report(
            config,
            &mut output,
            ScanDiagnostic::Unterminated {
                line: open.start_line,
                kind: open.kind,
            },
        );
        emit(config, &mut output, FoldRange::new(open.start_line, last_line));
    }

    log_if!(config, folding, debug, ranges = output.ranges.len(), "folding scan complete");
    Ok(output)
}

/// Compute fold ranges for a whole buffer.
pub fn folding_ranges_in_text<C>(
    text: &str,
    config: &ScanConfig,
    cancel: &C,
) -> Result<FoldingOutput, Cancelled>
where
    C: CancellationToken + ?Sized,
{
    let lines: Vec<&str> = LineIndex::new(text).lines().collect();
    folding_ranges(&lines, config, cancel)
}

fn emit(config: &ScanConfig, output: &mut FoldingOutput, range: FoldRange) {
    log_if!(config, folding, trace, start = range.start_line, end = range.end_line, "range");
    output.ranges.push(range);
}

fn report(config: &ScanConfig, output: &mut FoldingOutput, diagnostic: ScanDiagnostic) {
    log_if!(config, folding, warn, "{diagnostic}");
    output.diagnostics.push(diagnostic);
}
