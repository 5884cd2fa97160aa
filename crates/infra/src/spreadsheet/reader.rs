use std::path::Path;

use autooptix_domain::{AutoOptixError, CellValue, Result, Table};
use calamine::{open_workbook_auto, DataType, Range, Reader};
use tracing::{debug, info};

use crate::errors::InfraError;

/// Which worksheet of a workbook to read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelector {
    #[default]
    First,
    Named(String),
}

impl SheetSelector {
    /// Named sheet when `name` is set, otherwise the first sheet
    pub fn from_option(name: Option<&str>) -> Self {
        name.map_or(Self::First, |n| Self::Named(n.to_string()))
    }
}

impl std::fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("<first sheet>"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Read one worksheet into a [`Table`]
///
/// The first row supplies the headers; blank header cells are named
/// `Unnamed: <column>`.
///
/// # Errors
/// `Io` when the file does not exist, `Spreadsheet` when the workbook cannot
/// be decoded or the requested sheet is absent.
pub fn read_table(path: &Path, sheet: &SheetSelector) -> Result<Table> {
    if !path.exists() {
        return Err(AutoOptixError::Io(format!("Workbook not found: {}", path.display())));
    }

    let mut workbook = open_workbook_auto(path).map_err(InfraError::from)?;
    let range = match sheet {
        SheetSelector::First => workbook.worksheet_range_at(0),
        SheetSelector::Named(name) => workbook.worksheet_range(name),
    }
    .ok_or_else(|| {
        AutoOptixError::Spreadsheet(format!(
            "Sheet {} not found in {} (available: {})",
            sheet,
            path.display(),
            workbook.sheet_names().join(", ")
        ))
    })?
    .map_err(InfraError::from)?;

    let table = table_from_range(&range);
    info!(
        path = %path.display(),
        sheet = %sheet,
        rows = table.len(),
        columns = table.headers().len(),
        "Workbook sheet loaded"
    );
    Ok(table)
}

/// Convert a decoded cell range into a table
pub fn table_from_range(range: &Range<DataType>) -> Table {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        debug!("Worksheet is empty");
        return Table::default();
    };

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            let text = cell_from_data(cell).to_text();
            let text = text.trim();
            if text.is_empty() {
                format!("Unnamed: {col}")
            } else {
                text.to_string()
            }
        })
        .collect();

    let data = rows.map(|row| row.iter().map(cell_from_data).collect()).collect();
    Table::with_rows(headers, data)
}

/// Map one decoded cell onto the domain cell model
///
/// Dates become `YYYY-MM-DD` text and error cells are treated as empty.
#[allow(clippy::cast_precision_loss)]
pub fn cell_from_data(cell: &DataType) -> CellValue {
    match cell {
        DataType::Empty | DataType::Error(_) => CellValue::Empty,
        DataType::String(s) => CellValue::Text(s.clone()),
        DataType::Int(i) => CellValue::Number(*i as f64),
        DataType::Float(f) | DataType::Duration(f) => CellValue::Number(*f),
        DataType::Bool(b) => CellValue::Bool(*b),
        DataType::DateTime(serial) => cell
            .as_datetime()
            .map(|dt| CellValue::Text(dt.format("%Y-%m-%d").to_string()))
            .unwrap_or(CellValue::Number(*serial)),
        DataType::DateTimeIso(s) | DataType::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
