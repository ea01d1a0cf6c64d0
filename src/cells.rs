//! Cell tokenizer: splits a row into cells while tracking quote state

use crate::dialect::Dialect;
use crate::rows::Row;
use crate::span::Span;
use memchr::{memchr, memchr2};
use std::iter::FusedIterator;

/// One field of a row, borrowed from the buffer.
///
/// Nothing is copied until [`Cell::value`] (or one of its siblings) is called.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    pub(crate) buf: &'a [u8],
    pub(crate) span: Span,
    pub(crate) escaped: bool,
    pub(crate) end_of_row: bool,
    pub(crate) dialect: &'a Dialect,
}

impl<'a> Cell<'a> {
    /// Get the cell's position in the buffer
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Whether the cell contains a doubled quote that [`Cell::value`] collapses.
    #[inline]
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// Whether this is the last cell of its row.
    #[inline]
    pub fn is_end_of_row(&self) -> bool {
        self.end_of_row
    }

    /// Get the raw length of the cell in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the cell has no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Forward-only iterator over the cells of a [`Row`].
///
/// The scan is permissive: a quote may open anywhere in a field, a quote
/// only closes when the next byte is the delimiter, and a doubled quote keeps
/// the field open. Whatever state the row ends in, the final cell is closed
/// at the row boundary.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    buf: &'a [u8],
    dialect: &'a Dialect,
    current: usize,
    end: usize,
    first: bool,
    finished: bool,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(row: &Row<'a>) -> Self {
        let span = row.span();
        Self {
            buf: row.buf,
            dialect: row.dialect,
            current: span.start,
            end: span.end,
            first: true,
            finished: span.is_empty(),
        }
    }

    #[inline]
    fn cell(&self, start: usize, end: usize, escaped: bool, end_of_row: bool) -> Cell<'a> {
        Cell {
            buf: self.buf,
            span: Span::new(start, end),
            escaped,
            end_of_row,
            dialect: self.dialect,
        }
    }

    /// Whether the byte after `i` (inside the row) is the delimiter.
    #[inline(always)]
    fn delimiter_follows(&self, i: usize) -> bool {
        i + 1 < self.end && self.buf[i + 1] == self.dialect.delimiter
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = Cell<'a>;

    fn next(&mut self) -> Option<Cell<'a>> {
        if self.finished {
            return None;
        }

        let Dialect {
            delimiter, quote, ..
        } = *self.dialect;

        let mut start = self.current;
        if !self.first && self.dialect.skip_initial_space && delimiter != b' ' {
            while start < self.end && self.buf[start] == b' ' {
                start += 1;
            }
        }
        self.first = false;

        let mut quote_open = false;
        let mut last_quote = 0;
        let mut escaped = false;
        let mut pos = start;

        loop {
            let rest = &self.buf[pos..self.end];
            // Inside quotes only another quote can change anything.
            let found = if quote_open {
                memchr(quote, rest)
            } else {
                memchr2(delimiter, quote, rest)
            };
            let Some(offset) = found else {
                break;
            };
            let i = pos + offset;

            if self.buf[i] == quote {
                if !quote_open {
                    quote_open = true;
                    last_quote = i;
                } else {
                    let doubled = last_quote + 1 == i;
                    if doubled {
                        escaped = true;
                    } else {
                        last_quote = i;
                    }
                    quote_open = doubled || !self.delimiter_follows(i);
                }
            } else {
                self.current = i + 1;
                return Some(self.cell(start, i, escaped, false));
            }

            pos = i + 1;
        }

        self.finished = true;
        Some(self.cell(start, self.end, escaped, true))
    }
}

impl FusedIterator for Cells<'_> {}
