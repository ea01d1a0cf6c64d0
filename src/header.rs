//! Header access and name-keyed row views

use crate::cells::Cells;
use crate::dialect::Dialect;
use crate::rows::{is_blank, Row, Rows};
use std::sync::Arc;

/// Column labels: the first line of the buffer, or names supplied through
/// [`Dialect::column_names`].
#[derive(Debug, Clone, Copy)]
pub enum Header<'a> {
    Row(Row<'a>),
    Names(&'a [String]),
    /// Empty buffer and no configured names.
    Empty,
}

impl<'a> Header<'a> {
    /// The header row when the labels come from the buffer.
    pub fn row(&self) -> Option<Row<'a>> {
        match self {
            Header::Row(row) => Some(*row),
            _ => None,
        }
    }

    /// The header cells when the labels come from the buffer.
    pub fn cells(&self) -> Option<Cells<'a>> {
        self.row().map(|row| row.cells())
    }

    /// Materialized column names in order.
    pub fn names(&self) -> Vec<String> {
        match self {
            Header::Row(row) => row.cells().map(|c| c.value()).collect(),
            Header::Names(names) => names.to_vec(),
            Header::Empty => Vec::new(),
        }
    }

    /// Number of columns, ignored ones included.
    pub fn len(&self) -> usize {
        match self {
            Header::Row(row) => row.cells().count(),
            Header::Names(names) => names.len(),
            Header::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A data row materialized into `(column name, value)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRow {
    names: Arc<[String]>,
    values: Vec<String>,
}

impl NamedRow {
    /// Get the value of the column called `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i].as_str())
    }

    /// Iterate over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Get the values in column order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Get the number of columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Iterator turning each data row into a [`NamedRow`].
///
/// Rows with fewer cells than the header get empty values for the missing
/// columns; cells beyond the header width are dropped. Blank lines are
/// skipped.
#[derive(Debug, Clone)]
pub struct NamedRows<'a> {
    rows: Rows<'a>,
    // One entry per header column: keep it or skip it.
    keep: Vec<bool>,
    names: Arc<[String]>,
}

impl<'a> NamedRows<'a> {
    pub(crate) fn new(rows: Rows<'a>, header: &Header<'a>, dialect: &Dialect) -> Self {
        let all = header.names();
        let keep: Vec<bool> = all.iter().map(|n| !dialect.is_ignored(n)).collect();
        let names: Arc<[String]> = all
            .into_iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| name)
            .collect();

        Self { rows, keep, names }
    }

    /// Names of the columns every yielded row carries.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Iterator for NamedRows<'_> {
    type Item = NamedRow;

    fn next(&mut self) -> Option<NamedRow> {
        let row = loop {
            let row = self.rows.next()?;
            if !is_blank(row.raw_value()) {
                break row;
            }
        };
        let mut cells = row.cells();
        let mut values = Vec::with_capacity(self.names.len());

        for &keep in &self.keep {
            match cells.next() {
                Some(cell) if keep => values.push(cell.value()),
                None if keep => values.push(String::new()),
                _ => {}
            }
        }

        Some(NamedRow {
            names: Arc::clone(&self.names),
            values,
        })
    }
}
