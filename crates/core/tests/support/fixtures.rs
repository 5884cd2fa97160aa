//! Table builders

use autooptix_domain::{CellValue, Table};

/// Catalogue sheet with every optional attribute column present.
///
/// Each row is `(subgroup, use case, automation, approach, left shift,
/// elimination, tier)`.
pub fn lookup_table(rows: &[[&str; 7]]) -> Table {
    Table::with_rows(
        [
            "Subgroup",
            "UseCase",
            "Automation Feasibility",
            "Automation Approach",
            "Left Shift Feasibility",
            "Elimination Feasibility",
            "L1/L2",
        ],
        rows.iter().map(|r| r.iter().map(|c| CellValue::from(*c)).collect()).collect(),
    )
}

/// Ticket sheet with `(description, closed month, priority)` rows.
pub fn ticket_table(rows: &[(&str, &str, &str)]) -> Table {
    Table::with_rows(
        ["Ticket ID", "Description", "Closed Month", "Priority"],
        rows.iter()
            .enumerate()
            .map(|(i, (desc, month, priority))| {
                vec![
                    CellValue::from(format!("INC{:04}", i + 1)),
                    CellValue::from(*desc),
                    CellValue::from(*month),
                    CellValue::from(*priority),
                ]
            })
            .collect(),
    )
}
