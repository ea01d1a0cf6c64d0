//! Cell materialization: raw bytes, trimmed views and unescaped values

use crate::cells::Cell;

/// Append `bytes` to `out`, collapsing every adjacent pair of `quote` bytes
/// into a single one. The kept quote is never paired again, so `"""` becomes
/// `""` and `""""` becomes `""`.
pub fn unescape_into(bytes: &[u8], quote: u8, out: &mut Vec<u8>) {
    let mut rest = bytes;
    while let Some(pos) = memchr::memchr(quote, rest) {
        let pair = rest.get(pos + 1) == Some(&quote);
        out.extend_from_slice(&rest[..=pos]);
        rest = &rest[pos + 1 + usize::from(pair)..];
    }
    out.extend_from_slice(rest);
}

impl<'a> Cell<'a> {
    /// The cell exactly as it appears in the buffer, e.g. `"""foo"""` stays
    /// `"""foo"""`.
    #[inline]
    pub fn raw_value(&self) -> &'a [u8] {
        self.span.slice(self.buf)
    }

    /// Append the raw bytes to `out`.
    pub fn read_raw_value(&self, out: &mut Vec<u8>) {
        if self.span.is_empty() {
            return;
        }
        out.extend_from_slice(self.raw_value());
    }

    /// The trimmed cell, still borrowed and without unescaping.
    #[inline]
    pub fn view(&self) -> &'a [u8] {
        self.dialect.trim.trim(self.buf, self.span).slice(self.buf)
    }

    /// Append the trimmed, unescaped value to `out`.
    pub fn read_value(&self, out: &mut Vec<u8>) {
        if self.span.is_empty() {
            return;
        }
        let trimmed = self.view();
        out.reserve(trimmed.len());
        unescape_into(trimmed, self.dialect.quote, out);
    }

    /// The trimmed, unescaped value as owned bytes.
    pub fn value_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.read_value(&mut out);
        out
    }

    /// The trimmed, unescaped value as a string. Invalid UTF-8 is replaced
    /// with U+FFFD.
    pub fn value(&self) -> String {
        match String::from_utf8(self.value_bytes()) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}
