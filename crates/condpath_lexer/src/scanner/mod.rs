//! Match-anywhere directive scanning over a whole buffer.
//!
//! The decoration scanner does not walk lines; it looks for directives
//! everywhere in the text and maps each match back to its line afterwards.
//! A match runs from the `#` to the end of its physical line, and scanning
//! resumes there, so a `#endif` inside the condition text of an earlier
//! directive on the same line is never reported separately.

use memchr::{memchr, memchr2};

use crate::directive::{match_keyword, Directive};

/// A directive found at a byte offset in the buffer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DirectiveMatch<'a> {
    /// Byte offset of the `#`.
    pub offset: usize,
    pub directive: Directive<'a>,
}

/// Iterator over every directive in a buffer, in document order.
pub struct DirectiveScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> DirectiveScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for DirectiveScanner<'a> {
    type Item = DirectiveMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        loop {
            let hash = self.pos + memchr(b'#', bytes.get(self.pos..)?)?;
            // `#` is ASCII, so `hash + 1` is a char boundary.
            let keyword_start = hash + 1;
            let Some((kind, len)) = match_keyword(&self.text[keyword_start..]) else {
                self.pos = keyword_start;
                continue;
            };

            let keyword_end = keyword_start + len;
            let line_end = memchr2(b'\r', b'\n', &bytes[keyword_end..])
                .map_or(self.text.len(), |i| keyword_end + i);
            self.pos = line_end;

            return Some(DirectiveMatch {
                offset: hash,
                directive: Directive {
                    kind,
                    keyword: &self.text[keyword_start..keyword_end],
                    condition: &self.text[keyword_end..line_end],
                },
            });
        }
    }
}

#[cfg(test)]
mod tests;
