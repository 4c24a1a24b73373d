//! The chain of condition names enclosing a reference line.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Ordered display names of the conditions enclosing a line, outermost first.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize)]
#[serde(transparent)]
pub struct ActivePath {
    names: SmallVec<[String; 4]>,
}

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new block.
    pub fn push(&mut self, name: String) {
        self.names.push(name);
    }

    /// Switch the innermost block to another branch.
    ///
    /// No-op on an empty path.
    pub fn replace_last(&mut self, name: String) {
        if let Some(last) = self.names.last_mut() {
            *last = name;
        }
    }

    /// Leave the innermost block.
    pub fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Status-bar text: `IFDEF Path: A->B` or `IFDEF Path: <None>`.
    pub fn status_text(&self) -> String {
        format!("IFDEF Path: {self}")
    }
}

impl fmt::Display for ActivePath {
    /// `A->B->C`, or `<None>` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            return f.write_str("<None>");
        }
        f.write_str(&self.names.join("->"))
    }
}
