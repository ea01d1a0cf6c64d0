//! Row splitter: lazy line scan over a buffer

use crate::cells::Cells;
use crate::dialect::Dialect;
use crate::span::Span;
use memchr::{memchr, memchr_iter};
use std::iter::FusedIterator;

pub const LINE_TERMINATOR: u8 = b'\n';

/// One line of the buffer, without its `\n` terminator.
///
/// A carriage return before the terminator stays part of the row; configure a
/// trim policy over `\r` to drop it from cell values.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub(crate) buf: &'a [u8],
    pub(crate) span: Span,
    pub(crate) dialect: &'a Dialect,
}

impl<'a> Row<'a> {
    /// Get the row's position in the buffer
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The row's bytes exactly as they appear in the buffer.
    #[inline]
    pub fn raw_value(&self) -> &'a [u8] {
        self.span.slice(self.buf)
    }

    /// Append the row's raw bytes to `out`.
    pub fn read_raw_value(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.raw_value());
    }

    /// Get the length of the row in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the row has no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Get a cursor over the row's cells
    pub fn cells(&self) -> Cells<'a> {
        Cells::new(self)
    }
}

impl<'a> IntoIterator for Row<'a> {
    type Item = crate::cells::Cell<'a>;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Cells<'a> {
        Cells::new(&self)
    }
}

/// A row counts as blank when it is empty or only holds the `\r` of a CRLF.
#[inline]
pub(crate) fn is_blank(line: &[u8]) -> bool {
    line.is_empty() || line == b"\r"
}

/// Span of the first line, or `None` for an empty buffer.
pub(crate) fn first_line(buf: &[u8]) -> Option<Span> {
    if buf.is_empty() {
        return None;
    }
    let end = memchr(LINE_TERMINATOR, buf).unwrap_or(buf.len());
    Some(Span::new(0, end))
}

/// Forward-only iterator over the data rows of a buffer.
///
/// A cursor cannot be rewound; ask the reader for a fresh one instead.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    buf: &'a [u8],
    dialect: &'a Dialect,
    position: usize,
    finished: bool,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(buf: &'a [u8], dialect: &'a Dialect) -> Self {
        let mut rows = Self {
            buf,
            dialect,
            position: 0,
            finished: buf.is_empty(),
        };

        if dialect.first_row_is_header {
            rows.skip_first_line();
        }

        rows
    }

    /// Rows after the first line, whatever the header flag says.
    pub(crate) fn after_first_line(buf: &'a [u8], dialect: &'a Dialect) -> Self {
        let mut rows = Self::new(buf, dialect);
        if !dialect.first_row_is_header {
            rows.skip_first_line();
        }
        rows
    }

    fn skip_first_line(&mut self) {
        if self.finished {
            return;
        }
        match memchr(LINE_TERMINATOR, self.buf) {
            Some(end) => self.position = end + 1,
            // The first line is the only one.
            None => self.finished = true,
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        loop {
            if self.finished {
                return None;
            }

            let start = self.position;
            let end = match memchr(LINE_TERMINATOR, &self.buf[start..]) {
                Some(offset) => {
                    self.position = start + offset + 1;
                    start + offset
                }
                None => {
                    self.finished = true;
                    self.buf.len()
                }
            };

            if self.dialect.skip_empty_rows && is_blank(&self.buf[start..end]) {
                continue;
            }

            return Some(Row {
                buf: self.buf,
                span: Span::new(start, end),
                dialect: self.dialect,
            });
        }
    }
}

impl FusedIterator for Rows<'_> {}

/// Count the data rows [`Rows`] would yield, without building any of them.
///
/// Each terminator ends one line and the text after the last terminator is
/// one more line, even when empty.
pub fn count_rows(buf: &[u8], dialect: &Dialect) -> usize {
    if buf.is_empty() {
        return 0;
    }

    let counts = |line: &[u8]| !(dialect.skip_empty_rows && is_blank(line));

    let mut result = 0;
    let mut start = 0;
    let mut header_pending = dialect.first_row_is_header;

    for end in memchr_iter(LINE_TERMINATOR, buf) {
        if header_pending {
            header_pending = false;
        } else if counts(&buf[start..end]) {
            result += 1;
        }
        start = end + 1;
    }

    if !header_pending && counts(&buf[start..]) {
        result += 1;
    }
    result
}
