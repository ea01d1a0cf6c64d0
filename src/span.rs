//! Byte ranges into a shared buffer

use std::ops::Range;

/// A half-open `start..end` range into a buffer.
///
/// A span owns nothing; it is only meaningful together with the buffer it
/// was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span; `start` must not exceed `end`
    #[inline(always)]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    /// Get the length of the span in bytes
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span covers no bytes
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Borrow the bytes this span covers.
    ///
    /// # Panics
    /// Panics if the span is out of bounds for `buf`.
    #[inline(always)]
    #[track_caller]
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start..self.end]
    }

    /// Get the span as a range of offsets
    #[inline(always)]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_slice() {
        let buf = b"hello,world";
        let span = Span::new(6, 11);
        assert_eq!(span.slice(buf), b"world");
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_empty_span() {
        let span = Span::from(3..3);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.slice(b"abcdef"), b"");
    }
}
