//! Tabular data model
//!
//! A [`Table`] is a fully materialised sheet: one header row plus data rows of
//! [`CellValue`]s. Tables are never mutated by the engines; enrichment
//! produces new records alongside the source rows.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_label_conversions;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Which table a column lookup ran against (used in error reporting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum TableKind {
    /// Uploaded ticket table
    Input,
    /// Subgroup keyword catalogue
    Lookup,
    /// Previously enriched ticket table
    Enriched,
}

impl_label_conversions!(TableKind {
    Input => "input",
    Lookup => "lookup",
    Enriched => "enriched",
});

/// A single spreadsheet cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// True for missing cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Raw textual rendering; integral numbers render without a fraction.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
        }
    }

    /// Trimmed, lower-cased rendering, or `None` for blank cells.
    ///
    /// `None` is the null sentinel: it compares unequal to every attribute
    /// value, so blank cells never satisfy a lever predicate.
    pub fn normalized(&self) -> Option<String> {
        crate::utils::text::normalize_value(&self.to_text())
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// An in-memory sheet with a header row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given headers
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { headers: headers.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    /// Create a table and append `rows`, normalising each to the header width
    pub fn with_rows<I, S>(headers: I, rows: Vec<Vec<CellValue>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(headers);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Append a row; short rows are padded with empty cells and long rows
    /// truncated so every row matches the header width.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.headers.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header, compared verbatim
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell at (`row`, `col`); out-of-range lookups yield an empty cell
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY_CELL)
    }

    /// Every cell of one column, in row order
    pub fn column(&self, col: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().map(move |row| row.get(col).unwrap_or(&EMPTY_CELL))
    }
}
