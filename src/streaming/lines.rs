//! Allocation-free line and tab splitting.
//!
//! Both splitters yield borrowed slices of the input and never copy.
//! They work on bytes: every delimiter is ASCII, so a multi-byte UTF-8
//! sequence can never be cut by a split.

use memchr::{memchr, memchr2};
use std::iter::FusedIterator;

/// One line produced by [`LineSplit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEntry<'a> {
    /// Line content without its terminator.
    pub line: &'a [u8],
    /// The terminator that ended the line: `\n`, `\r`, `\r\n`, or empty
    /// when the input ended first.
    pub separator: &'a [u8],
}

impl LineEntry<'_> {
    /// True when the line ended with a terminator. A line without one was
    /// cut off by the end of the input and may be incomplete.
    #[inline]
    pub fn has_separator(&self) -> bool {
        !self.separator.is_empty()
    }
}

/// Iterator over the lines of a byte span.
///
/// A line ends at `\n`, at `\r\n` (consumed as one separator), or at a `\r`
/// not followed by `\n`. Remaining bytes without a terminator are yielded
/// as a final entry with an empty separator. An empty span yields nothing.
#[derive(Debug, Clone)]
pub struct LineSplit<'a> {
    rest: &'a [u8],
}

/// Split `span` into lines.
#[inline]
pub fn split_lines(span: &[u8]) -> LineSplit<'_> {
    LineSplit { rest: span }
}

impl<'a> Iterator for LineSplit<'a> {
    type Item = LineEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.rest;
        if span.is_empty() {
            return None;
        }

        let Some(index) = memchr2(b'\r', b'\n', span) else {
            self.rest = &[];
            return Some(LineEntry {
                line: span,
                separator: &[],
            });
        };

        let separator_len = if span[index] == b'\r' && span.get(index + 1) == Some(&b'\n') {
            2
        } else {
            1
        };
        self.rest = &span[index + separator_len..];
        Some(LineEntry {
            line: &span[..index],
            separator: &span[index..index + separator_len],
        })
    }
}

impl FusedIterator for LineSplit<'_> {}

/// Iterator over the tab-separated fields of a line.
///
/// Empty fields are yielded as empty slices, including a leading or
/// trailing one; a line with `n` tabs always yields `n + 1` fields.
#[derive(Debug, Clone)]
pub struct TabSplit<'a> {
    rest: &'a [u8],
    done: bool,
}

/// Split `line` on `\t`.
#[inline]
pub fn split_tabs(line: &[u8]) -> TabSplit<'_> {
    TabSplit {
        rest: line,
        done: false,
    }
}

impl<'a> Iterator for TabSplit<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let span = self.rest;
        match memchr(b'\t', span) {
            Some(index) => {
                self.rest = &span[index + 1..];
                Some(&span[..index])
            }
            None => {
                self.done = true;
                self.rest = &[];
                Some(span)
            }
        }
    }
}

impl FusedIterator for TabSplit<'_> {}
