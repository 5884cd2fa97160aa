//! Rebuild an enriched table from an exported or hand-edited sheet

use autooptix_domain::constants::UNMATCHED_USE_CASE;
use autooptix_domain::{
    normalize_value, AutoOptixError, CellValue, EnrichedRecord, EnrichedTable,
    EnrichmentAttributes, Result, Table, TableKind,
};
use tracing::info;

use crate::columns::ColumnResolver;

const TIER: &[&str] = &["L1_L2", "L1/L2", "Level", "Ticket Level"];
const ELIMINATION: &[&str] = &["Elimination_Feasibility", "Elimination", "Can Eliminate"];
const USE_CASE: &[&str] = &["UseCase", "Use Case", "Case Name"];
const AUTOMATION: &[&str] = &["Automation_Feasibility", "Automation", "Can Automate"];
const APPROACH: &[&str] = &["Automation_Approach", "Std/Agentic", "Automation Type"];
const LEFT_SHIFT: &[&str] = &["Left_Shift_Feasibility", "Left Shift", "Can Left Shift"];
const MATCHED_KEYWORD: &[&str] = &["Matched_Keyword"];
const MATCH_SCORE: &[&str] = &["Match_Score"];

/// Read an enriched sheet back into typed records
///
/// Enrichment columns are located with the extended resolver, so headers
/// such as "L1/L2", "Std/Agentic" or "Left Shift" are accepted. All other
/// columns are kept as source fields. A row counts as matched when its
/// matched-keyword cell is non-blank, or, without that column, when its use
/// case is anything other than "Others".
///
/// # Errors
/// Returns `AutoOptixError::MissingColumn` naming the first absent tier,
/// elimination, use-case, automation, approach or left-shift column.
pub fn read_enriched_table(table: &Table) -> Result<EnrichedTable> {
    let resolver = ColumnResolver::extended();
    let headers = table.headers();
    let require = |field: &str, candidates: &[&str]| {
        resolver
            .resolve(headers, candidates)
            .ok_or_else(|| AutoOptixError::missing_column(TableKind::Enriched, field))
    };

    let tier = require("L1_L2", TIER)?;
    let elimination = require("Elimination", ELIMINATION)?;
    let use_case = require("UseCase", USE_CASE)?;
    let automation = require("Automation", AUTOMATION)?;
    let approach = require("Automation Approach", APPROACH)?;
    let left_shift = require("Left Shift", LEFT_SHIFT)?;
    let keyword = resolver.resolve(headers, MATCHED_KEYWORD);
    let score = resolver.resolve(headers, MATCH_SCORE);

    let mut enrichment_cols = vec![tier, elimination, use_case, automation, approach, left_shift];
    enrichment_cols.extend(keyword);
    enrichment_cols.extend(score);

    let source_cols: Vec<usize> =
        (0..headers.len()).filter(|c| !enrichment_cols.contains(c)).collect();
    let source_headers: Vec<String> = source_cols.iter().map(|&c| headers[c].clone()).collect();

    let records: Vec<EnrichedRecord> = (0..table.len())
        .map(|row| {
            let text = |col: usize| table.cell(row, col).to_text();
            let attributes = EnrichmentAttributes {
                use_case: text(use_case),
                automation_feasibility: text(automation),
                automation_approach: text(approach),
                left_shift_feasibility: text(left_shift),
                elimination_feasibility: text(elimination),
                tier: text(tier),
            };
            let matched_keyword = keyword.map(|c| text(c).trim().to_string()).unwrap_or_default();
            let matched = match keyword {
                Some(_) => !matched_keyword.is_empty(),
                None => {
                    normalize_value(&attributes.use_case)
                        .is_some_and(|u| u != UNMATCHED_USE_CASE.to_lowercase())
                }
            };
            let match_score = score.map(|c| score_value(table.cell(row, c))).unwrap_or(0.0);

            EnrichedRecord {
                row_index: row,
                fields: source_cols.iter().map(|&c| table.cell(row, c).clone()).collect(),
                matched_keyword,
                match_score,
                matched,
                attributes,
            }
        })
        .collect();

    info!(rows = records.len(), source_columns = source_headers.len(), "Enriched table loaded");
    Ok(EnrichedTable::new(source_headers, records))
}

fn score_value(cell: &CellValue) -> f64 {
    match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => s.trim().parse().unwrap_or(0.0),
        CellValue::Empty | CellValue::Bool(_) => 0.0,
    }
}
