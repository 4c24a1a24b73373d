//! Conditional-block structure for editor hosts.
//!
//! Two scanners share the classifier from `condpath_lexer` and never call
//! each other:
//!
//! ```text
//! lines ──► fold::folding_ranges ──► FoldRange pairs
//!
//! text + reference line ──► decorate::decorations ──► DecorationSet
//!                                                      ├─ per-band annotations
//!                                                      └─ ActivePath ("IFDEF Path: A->B")
//! ```
//!
//! [`tracker`] wraps the decoration scanner with the cursor-line
//! suppression and the [`DecorationHost`] rendering seam. [`section`] finds
//! the conditional section around a line for "collapse this section"
//! commands.
//!
//! # Debugging
//!
//! Per-event logging goes through `tracing` and is additionally gated by
//! [`DebugFlags`] in the [`ScanConfig`] passed to each scan:
//! - `RUST_LOG=condpath::folding=trace` with [`DebugFlags::FOLDING`]
//! - `RUST_LOG=condpath::decorations=trace` with [`DebugFlags::DECORATIONS`]
//!
//! Malformed input (a stray `#endif`, an unterminated `#if`) never fails a
//! scan; it is reported as a [`ScanDiagnostic`] alongside the output.

/// Emit a `tracing` event only when a debug category is enabled.
///
/// ```text
/// log_if!(config, folding, trace, line, "push");
/// ```
macro_rules! log_if {
    ($config:expr, folding, $level:ident, $($arg:tt)+) => {
        if $config.debug.contains($crate::config::DebugFlags::FOLDING) {
            ::tracing::$level!(target: "condpath::folding", $($arg)+);
        }
    };
    ($config:expr, decorations, $level:ident, $($arg:tt)+) => {
        if $config.debug.contains($crate::config::DebugFlags::DECORATIONS) {
            ::tracing::$level!(target: "condpath::decorations", $($arg)+);
        }
    };
}

pub mod config;
pub mod decorate;
pub mod diagnostic;
pub mod fold;
pub mod path;
pub mod section;
pub mod tracker;

pub use config::{ConfigError, DebugFlags, ScanConfig};
pub use decorate::{band_color, decorations, Annotation, DecorationSet, BAND_COUNT};
pub use diagnostic::ScanDiagnostic;
pub use fold::{
    folding_ranges, folding_ranges_in_text, CancellationToken, Cancelled, FoldRange,
    FoldingOutput, NeverCancel,
};
pub use path::ActivePath;
pub use section::{enclosing_section, Section};
pub use tracker::{Cursor, CursorTracker, DecorationHost, HostEvent, PathDecorator, Refresh};
