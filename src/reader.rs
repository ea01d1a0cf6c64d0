//! Top-level reader tying a buffer to a dialect

use crate::dialect::Dialect;
use crate::error::Result;
use crate::header::{Header, NamedRows};
use crate::io::Buffer;
use crate::rows::{count_rows, first_line, Row, Rows};
use crate::span::Span;
use std::io::Read;
use std::path::Path;

/// A CSV reader over an immutable buffer.
///
/// The reader owns (or borrows) the bytes; rows and cells borrow from the
/// reader and never copy. Independent cursors may be created freely, from any
/// number of threads.
///
/// ```
/// use zerocsv::{Dialect, Reader};
///
/// let reader = Reader::from_text("a,b\n1,2\n3,4", Dialect::default());
/// assert_eq!(reader.row_count(), 2);
/// assert_eq!(reader.col_count(), 2);
///
/// let values: Vec<String> = reader
///     .rows()
///     .flat_map(|row| row.cells().map(|c| c.value()).collect::<Vec<_>>())
///     .collect();
/// assert_eq!(values, ["1", "2", "3", "4"]);
/// ```
#[derive(Debug)]
pub struct Reader<'a> {
    buffer: Buffer<'a>,
    dialect: Dialect,
    header: Option<Span>,
}

impl Reader<'static> {
    /// Memory-map `path` and read it with `dialect`.
    pub fn open(path: impl AsRef<Path>, dialect: Dialect) -> Result<Self> {
        Ok(Self::from_buffer(Buffer::open(path)?, dialect))
    }

    /// Read all of `reader` into memory.
    pub fn read_from<R: Read>(reader: R, dialect: Dialect) -> Result<Self> {
        Ok(Self::from_buffer(Buffer::read_from(reader)?, dialect))
    }
}

impl<'a> Reader<'a> {
    /// Read caller-owned text. Empty text yields zero rows rather than an error.
    pub fn from_text(content: &'a str, dialect: Dialect) -> Self {
        Self::from_bytes(content.as_bytes(), dialect)
    }

    /// Read caller-owned bytes. Empty input yields zero rows.
    pub fn from_bytes(content: &'a [u8], dialect: Dialect) -> Self {
        Self::from_buffer(Buffer::borrowed(content), dialect)
    }

    /// Read an already acquired buffer
    pub fn from_buffer(buffer: Buffer<'a>, dialect: Dialect) -> Self {
        let header = first_line(buffer.data());
        tracing::debug!(
            bytes = buffer.len(),
            mapped = buffer.is_mapped(),
            first_row_is_header = dialect.first_row_is_header,
            "created csv reader"
        );
        Self {
            buffer,
            dialect,
            header,
        }
    }

    /// Get the underlying buffer
    pub fn buffer(&self) -> &Buffer<'a> {
        &self.buffer
    }

    /// Get the dialect in use
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// A fresh cursor over the data rows.
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(self.buffer.data(), &self.dialect)
    }

    /// Number of data rows, counted without tokenizing any cell. Always
    /// equal to `self.rows().count()`.
    pub fn row_count(&self) -> usize {
        count_rows(self.buffer.data(), &self.dialect)
    }

    /// The column labels. Configured column names win over the first line,
    /// which is returned whether or not it is treated as a header.
    pub fn header(&self) -> Header<'_> {
        if let Some(names) = &self.dialect.column_names {
            tracing::trace!(columns = names.len(), "using configured column names");
            return Header::Names(names);
        }
        match self.header {
            Some(span) => Header::Row(Row {
                buf: self.buffer.data(),
                span,
                dialect: &self.dialect,
            }),
            None => Header::Empty,
        }
    }

    /// Number of header columns minus the ignored ones.
    pub fn col_count(&self) -> usize {
        let header = self.header();
        match header {
            Header::Empty => 0,
            _ if self.dialect.ignore_columns.is_empty() => header.len(),
            _ => header
                .names()
                .iter()
                .filter(|name| !self.dialect.is_ignored(name))
                .count(),
        }
    }

    /// Data rows as `(column name, value)` pairs.
    ///
    /// When the labels come from the first line, that line is never yielded,
    /// even with the header flag off. Blank lines (such as the one after a
    /// trailing `\n`) are skipped.
    pub fn named_rows(&self) -> NamedRows<'_> {
        let header = self.header();
        let rows = match header {
            Header::Row(_) if !self.dialect.first_row_is_header => {
                Rows::after_first_line(self.buffer.data(), &self.dialect)
            }
            _ => self.rows(),
        };
        NamedRows::new(rows, &header, &self.dialect)
    }
}

impl<'r> IntoIterator for &'r Reader<'_> {
    type Item = Row<'r>;
    type IntoIter = Rows<'r>;

    fn into_iter(self) -> Rows<'r> {
        self.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs::File;
    use std::io::Write;

    fn values(reader: &Reader<'_>) -> Vec<String> {
        let mut out = Vec::new();
        for row in reader {
            for cell in row {
                out.push(cell.value());
            }
        }
        out
    }

    #[test]
    fn test_open_file() {
        let test_file = std::env::temp_dir().join("zerocsv_reader_open.csv");
        {
            let mut file = File::create(&test_file).unwrap();
            file.write_all(b"a,b,c\n1,2,3\n4,5,6").unwrap();
        }

        let reader = Reader::open(&test_file, Dialect::default()).unwrap();
        assert!(reader.buffer().is_mapped());
        assert_eq!(reader.row_count(), 2);
        assert_eq!(reader.col_count(), 3);
        assert_eq!(values(&reader), ["1", "2", "3", "4", "5", "6"]);

        drop(reader);
        std::fs::remove_file(test_file).ok();
    }

    #[test]
    fn test_open_errors() {
        let missing = std::env::temp_dir().join("zerocsv_reader_missing.csv");
        std::fs::remove_file(&missing).ok();
        assert!(matches!(
            Reader::open(&missing, Dialect::default()),
            Err(Error::FileNotFound { .. })
        ));

        let empty = std::env::temp_dir().join("zerocsv_reader_empty.csv");
        File::create(&empty).unwrap();
        assert!(matches!(
            Reader::open(&empty, Dialect::default()),
            Err(Error::EmptyFile { .. })
        ));
        std::fs::remove_file(empty).ok();
    }

    #[test]
    fn test_empty_text() {
        let reader = Reader::from_text("", Dialect::default().header(false));
        assert_eq!(reader.row_count(), 0);
        assert_eq!(reader.col_count(), 0);
        assert_eq!(reader.rows().count(), 0);
    }

    #[test]
    fn test_read_from() {
        let reader =
            Reader::read_from(&b"x;y\n1;2\n"[..], Dialect::default().delimiter(b';')).unwrap();
        assert_eq!(reader.header().names(), ["x", "y"]);
        // The trailing terminator leaves one empty row.
        assert_eq!(reader.row_count(), 2);
        assert_eq!(values(&reader), ["1", "2"]);
    }

    #[test]
    fn test_header_without_header_flag() {
        let reader = Reader::from_text("a,b,c\n1,2,3", Dialect::default().header(false));
        assert_eq!(reader.header().names(), ["a", "b", "c"]);
        assert_eq!(reader.row_count(), 2);
    }

    #[test]
    fn test_named_rows_without_header_flag() {
        let reader = Reader::from_text("a,b\n1,2", Dialect::default().header(false));
        let rows: Vec<_> = reader.named_rows().collect();
        assert_eq!(rows.len(), 1);
        let pairs: Vec<(&str, &str)> = rows[0].iter().collect();
        assert_eq!(pairs, [("a", "1"), ("b", "2")]);

        // Only a label line: no data.
        let reader = Reader::from_text("a,b", Dialect::default().header(false));
        assert_eq!(reader.named_rows().count(), 0);

        // Configured names label every line, the first one included.
        let dialect = Dialect::default().header(false).column_names(["x", "y"]);
        let reader = Reader::from_text("a,b\n1,2", dialect);
        let rows: Vec<_> = reader.named_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("x"), Some("a"));
        assert_eq!(rows[1].get("y"), Some("2"));
    }

    #[test]
    fn test_named_rows_skip_trailing_blank() {
        let reader = Reader::from_text("a,b\n1,2\n", Dialect::default());
        assert_eq!(reader.row_count(), 2);
        let rows: Vec<_> = reader.named_rows().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].values(), ["1", "2"]);
    }

    #[test]
    fn test_fresh_cursors() {
        let reader = Reader::from_text("h\n1\n2", Dialect::default());
        let mut first = reader.rows();
        assert!(first.next().is_some());
        assert_eq!(reader.rows().count(), 2);
        assert_eq!(first.count(), 1);
    }
}
