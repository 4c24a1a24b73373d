//! Condition text to display name.
//!
//! A single pass applies, in order:
//!
//! 1. drop a trailing `// ...` comment and surrounding whitespace;
//! 2. `defined(X)` becomes `X`, `!defined(X)` becomes `!X` (anything after
//!    the first `)` is kept);
//! 3. `!(EXPR)` becomes `!EXPR`, removing one layer of parentheses;
//! 4. every literal `!!` is removed, left to right, without rescanning.
//!
//! Passes repeat until the text stops changing. A pass that changes
//! anything makes the text strictly shorter, so this terminates, and the
//! result is a fixed point: normalizing a display name again returns it
//! unchanged.
//!
//! Opening directives then go through [`open_display_name`], which gives
//! `#ifndef` conditions (and already-negated ones) exactly one leading `!`.

use crate::DirectiveKind;

/// Normalize raw condition text into a display name.
///
/// Empty or comment-only text yields an empty name.
pub fn normalize_condition(raw: &str) -> String {
    let mut name = normalize_pass(raw);
    loop {
        let next = normalize_pass(&name);
        if next == name {
            return name;
        }
        name = next;
    }
}

fn normalize_pass(raw: &str) -> String {
    let name = strip_comment(raw);
    let name = strip_defined(name);
    let name = strip_negated_parens(&name);
    name.replace("!!", "")
}

fn strip_comment(raw: &str) -> &str {
    raw.split("//").next().unwrap_or_default().trim()
}

fn strip_defined(name: &str) -> String {
    let (negated, rest) = match name.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, name),
    };
    let Some(inner) = rest.strip_prefix("defined(") else {
        return name.to_owned();
    };
    let Some(close) = inner.find(')') else {
        return name.to_owned();
    };

    let bang = if negated { "!" } else { "" };
    format!("{bang}{}{}", &inner[..close], &inner[close + 1..])
}

fn strip_negated_parens(name: &str) -> String {
    match name
        .strip_prefix("!(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => format!("!{inner}"),
        None => name.to_owned(),
    }
}

/// Display name for an opening directive.
///
/// `#ifndef X` and conditions already starting with `!` display with
/// exactly one leading `!`; everything else is returned as is.
pub fn open_display_name(kind: DirectiveKind, name: &str) -> String {
    let negated = kind == DirectiveKind::IfNDef || name.starts_with('!');
    if negated {
        format!("!{}", name.strip_prefix('!').unwrap_or(name))
    } else {
        name.to_owned()
    }
}

/// Flip a single leading `!`: `X` becomes `!X`, `!X` becomes `X`.
pub fn negate(name: &str) -> String {
    match name.strip_prefix('!') {
        Some(positive) => positive.to_owned(),
        None => format!("!{name}"),
    }
}
