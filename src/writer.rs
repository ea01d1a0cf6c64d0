//! Minimal row writer

use crate::dialect::DEFAULT_DELIMITER;
use crate::error::Result;
use crate::rows::LINE_TERMINATOR;
use std::io::Write;

/// Writes rows of fields joined by a delimiter, one row per line.
///
/// Fields are written verbatim: quoting is the caller's business, matching
/// how the reader hands out cells verbatim.
#[derive(Debug)]
pub struct Writer<W: Write> {
    inner: W,
    delimiter: u8,
}

impl<W: Write> Writer<W> {
    /// Create a writer using the default delimiter
    pub fn new(inner: W) -> Self {
        Self::with_delimiter(inner, DEFAULT_DELIMITER)
    }

    /// Create a writer using `delimiter` between fields
    pub fn with_delimiter(inner: W, delimiter: u8) -> Self {
        Self { inner, delimiter }
    }

    /// Write one row followed by a line terminator
    pub fn write_row<S: AsRef<str>>(&mut self, row: &[S]) -> Result<()> {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                self.inner.write_all(&[self.delimiter])?;
            }
            self.inner.write_all(field.as_ref().as_bytes())?;
        }
        self.inner.write_all(&[LINE_TERMINATOR])?;
        Ok(())
    }

    /// Write every row in order
    pub fn write_rows<R, S>(&mut self, rows: impl IntoIterator<Item = R>) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        for row in rows {
            self.write_row(row.as_ref())?;
        }
        Ok(())
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.inner)
    }
}
