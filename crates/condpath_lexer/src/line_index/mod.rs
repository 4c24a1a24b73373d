//! Byte offset to line mapping.
//!
//! Lines are split on `\n`; a trailing `\r` is not part of the line text.
//! A buffer always has at least one line, and a trailing newline starts an
//! empty last line, the way editors count them.

use std::ops::Range;

use memchr::memchr_iter;

/// Line-start table over a borrowed buffer.
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the first character of each line. Never empty.
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut starts = Vec::with_capacity(text.len() / 32 + 1);
        starts.push(0);
        starts.extend(memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
        Self { text, starts }
    }

    /// Number of lines, including an empty last line after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Zero-based line containing byte `offset`.
    ///
    /// Offsets past the end of the buffer map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Byte range of a line's text, without its terminator.
    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        let start = *self.starts.get(line)?;
        let end = self
            .starts
            .get(line + 1)
            .map_or(self.text.len(), |&next| next - 1);
        let end = if self.text.as_bytes()[start..end].ends_with(b"\r") {
            end - 1
        } else {
            end
        };
        Some(start..end)
    }

    /// Text of a line, without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        self.line_range(line).map(|range| &self.text[range])
    }

    /// All lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        (0..self.line_count()).filter_map(|line| self.line_text(line))
    }
}
