//! Low-level directive recognition for conditional-compilation blocks.
//!
//! This crate knows how to spot `#if`/`#ifdef`/`#ifndef`/`#elif`/`#elseif`/
//! `#else`/`#endif` in source text and how to turn the trailing condition
//! text into a display name. It does not track nesting; that is the job of
//! `condpath_scan`, which builds both the folding scanner and the
//! decoration scanner on top of the single classifier defined here.
//!
//! # Layers
//!
//! - [`directive`]: the keyword classifier ([`DirectiveKind`], [`Directive`],
//!   [`classify_line`]).
//! - [`scanner`]: match-anywhere iteration over a whole buffer.
//! - [`line_index`]: byte offset to line mapping.
//! - [`normalize`]: condition text to display name.
//!
//! Recognition is line-oriented pattern matching, not tokenization: a `#if`
//! inside a string literal or a multi-line block comment is still reported.

pub mod directive;
pub mod line_index;
pub mod normalize;
pub mod scanner;

pub use directive::{classify_line, is_comment_line, Directive, DirectiveKind};
pub use line_index::LineIndex;
pub use normalize::{negate, normalize_condition, open_display_name};
pub use scanner::{DirectiveMatch, DirectiveScanner};
