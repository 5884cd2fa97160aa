//! CSV rendering of tables

use std::path::Path;

use autooptix_domain::{round_to, CellValue, GradeTable, LeverSummaryRow, Result, Table};

/// Quote a field containing a comma, quote, or line break
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Header line followed by one line per row
pub fn table_to_csv(table: &Table) -> String {
    let mut out = String::new();
    push_line(&mut out, table.headers().iter().map(String::as_str));
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(CellValue::to_text).collect();
        push_line(&mut out, cells.iter().map(String::as_str));
    }
    out
}

fn push_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let line: Vec<String> = fields.map(escape_field).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    std::fs::write(path, table_to_csv(table))?;
    Ok(())
}

/// Optimization summary sheet: `Lever`, `# of UseCases`, `Volume`, `FTE`
pub fn summary_table(rows: &[LeverSummaryRow]) -> Table {
    Table::with_rows(
        ["Lever", "# of UseCases", "Volume", "FTE"],
        rows.iter()
            .map(|row| {
                vec![
                    CellValue::from(row.lever.as_str()),
                    CellValue::Number(row.usecases as f64),
                    CellValue::Number(row.volume),
                    CellValue::Number(row.fte),
                ]
            })
            .collect(),
    )
}

/// Grade-wise roster sheet: `Grade`, `M1` .. `M18`, values to two decimals
pub fn grade_sheet(grades: &GradeTable) -> Table {
    let mut headers = vec!["Grade".to_string()];
    headers.extend(GradeTable::month_labels());

    let rows = grades
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![CellValue::from(row.grade.as_str())];
            cells.extend(row.months.iter().map(|v| CellValue::Number(round_to(*v, 2))));
            cells
        })
        .collect();
    Table::with_rows(headers, rows)
}
