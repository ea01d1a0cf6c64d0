//! Runtime CSV dialect configuration

use crate::trim::TrimPolicy;

pub const DEFAULT_DELIMITER: u8 = b',';
pub const DEFAULT_QUOTE: u8 = b'"';

/// How a buffer is split into rows and cells, and how cells are materialized.
///
/// Built with chained setters:
///
/// ```
/// use zerocsv::{Dialect, TrimPolicy};
///
/// let dialect = Dialect::default()
///     .delimiter(b';')
///     .header(false)
///     .trim(TrimPolicy::none());
/// assert_eq!(dialect.delimiter, b';');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
    pub first_row_is_header: bool,
    pub trim: TrimPolicy,
    pub skip_empty_rows: bool,
    pub skip_initial_space: bool,
    pub ignore_columns: Vec<String>,
    /// Column names used in place of the first line when labelling cells.
    pub column_names: Option<Vec<String>>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            first_row_is_header: true,
            trim: TrimPolicy::default(),
            skip_empty_rows: false,
            skip_initial_space: false,
            ignore_columns: Vec::new(),
            column_names: None,
        }
    }
}

impl Dialect {
    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Set whether the first line is a header
    pub fn header(mut self, first_row_is_header: bool) -> Self {
        self.first_row_is_header = first_row_is_header;
        self
    }

    /// Set the trim policy applied to cell values
    pub fn trim(mut self, trim: TrimPolicy) -> Self {
        self.trim = trim;
        self
    }

    /// Set whether blank lines are skipped
    pub fn skip_empty_rows(mut self, skip: bool) -> Self {
        self.skip_empty_rows = skip;
        self
    }

    /// Set whether spaces after a delimiter are dropped
    pub fn skip_initial_space(mut self, skip: bool) -> Self {
        self.skip_initial_space = skip;
        self
    }

    /// Set the column names left out of counts and named rows
    pub fn ignore_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the column names used instead of the first line
    pub fn column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Check whether a column name is in the ignore list
    #[inline]
    pub fn is_ignored(&self, column: &str) -> bool {
        self.ignore_columns.iter().any(|c| c == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trim::Trim;

    #[test]
    fn test_defaults() {
        let dialect = Dialect::default();
        assert_eq!(dialect.delimiter, b',');
        assert_eq!(dialect.quote, b'"');
        assert!(dialect.first_row_is_header);
        assert_eq!(dialect.trim.mode(), Trim::LeadingAndTrailing);
        assert!(!dialect.skip_empty_rows);
        assert!(!dialect.skip_initial_space);
        assert!(dialect.column_names.is_none());
    }

    #[test]
    fn test_builder() {
        let dialect = Dialect::default()
            .delimiter(b'\t')
            .quote(b'\'')
            .header(false)
            .skip_empty_rows(true)
            .ignore_columns(["b"])
            .column_names(vec!["a".to_string(), "b".to_string()]);

        assert_eq!(dialect.delimiter, b'\t');
        assert_eq!(dialect.quote, b'\'');
        assert!(!dialect.first_row_is_header);
        assert!(dialect.skip_empty_rows);
        assert!(dialect.is_ignored("b"));
        assert!(!dialect.is_ignored("a"));
        assert_eq!(dialect.column_names.as_deref().map(<[String]>::len), Some(2));
    }
}
