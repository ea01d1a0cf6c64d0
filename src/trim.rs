//! Trim policies applied when a cell is materialized

use crate::span::Span;

/// Which ends of a cell are trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trim {
    None,
    Leading,
    Trailing,
    #[default]
    LeadingAndTrailing,
}

/// Whitespace trimmed by the default policy.
pub const WHITESPACE: &[u8] = b" \t";

/// A trim mode together with the set of bytes it strips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimPolicy {
    trim: Trim,
    characters: Vec<u8>,
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self::whitespace()
    }
}

impl TrimPolicy {
    /// Create a policy from a mode and the bytes it strips
    pub fn new(trim: Trim, characters: impl Into<Vec<u8>>) -> Self {
        Self {
            trim,
            characters: characters.into(),
        }
    }

    /// Leave cells untouched.
    pub fn none() -> Self {
        Self::new(Trim::None, Vec::new())
    }

    /// Strip spaces and tabs from both ends.
    pub fn whitespace() -> Self {
        Self::new(Trim::LeadingAndTrailing, WHITESPACE)
    }

    /// Strip an arbitrary fixed set of bytes from both ends.
    pub fn characters(characters: impl Into<Vec<u8>>) -> Self {
        Self::new(Trim::LeadingAndTrailing, characters)
    }

    /// Get the trim mode
    pub fn mode(&self) -> Trim {
        self.trim
    }

    /// Get the bytes this policy strips
    pub fn trim_characters(&self) -> &[u8] {
        &self.characters
    }

    #[inline(always)]
    fn is_trim_char(&self, byte: u8) -> bool {
        self.characters.contains(&byte)
    }

    /// Narrow `span` so that it no longer starts or ends with a trim byte.
    pub fn trim(&self, buf: &[u8], span: Span) -> Span {
        let Span { mut start, mut end } = span;

        if matches!(self.trim, Trim::Leading | Trim::LeadingAndTrailing) {
            while start != end && self.is_trim_char(buf[start]) {
                start += 1;
            }
        }
        if matches!(self.trim, Trim::Trailing | Trim::LeadingAndTrailing) {
            while start != end && self.is_trim_char(buf[end - 1]) {
                end -= 1;
            }
        }

        Span::new(start, end)
    }

    /// Convenience wrapper returning the trimmed bytes of a whole slice.
    pub fn trim_slice<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        self.trim(bytes, Span::new(0, bytes.len())).slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_both_ends() {
        let policy = TrimPolicy::whitespace();
        assert_eq!(policy.trim_slice(b" \t a b\t "), b"a b");
    }

    #[test]
    fn test_no_trimming() {
        let policy = TrimPolicy::none();
        assert_eq!(policy.trim_slice(b"  a  "), b"  a  ");
    }

    #[test]
    fn test_leading_and_trailing_only() {
        let leading = TrimPolicy::new(Trim::Leading, WHITESPACE);
        let trailing = TrimPolicy::new(Trim::Trailing, WHITESPACE);
        assert_eq!(leading.trim_slice(b"  a  "), b"a  ");
        assert_eq!(trailing.trim_slice(b"  a  "), b"  a");
    }

    #[test]
    fn test_custom_characters() {
        let policy = TrimPolicy::characters(*b"\r\n");
        assert_eq!(policy.trim_slice(b"value\r"), b"value");
        assert_eq!(policy.trim_slice(b" value "), b" value ");
    }

    #[test]
    fn test_all_trimmed() {
        let policy = TrimPolicy::whitespace();
        let buf = b"x,   ,y";
        let span = policy.trim(buf, Span::new(2, 5));
        assert!(span.is_empty());
        assert_eq!(span.start, 5);
    }

    #[test]
    fn test_span_offsets_preserved() {
        let buf = b"a, b ,c";
        let span = TrimPolicy::whitespace().trim(buf, Span::new(2, 6));
        assert_eq!(span, Span::new(3, 4));
        assert_eq!(span.slice(buf), b"b");
    }
}
