//! Types produced by keyword enrichment
//!
//! A lookup catalogue maps subgroup keywords to feasibility attributes. Every
//! ticket row is matched against that catalogue and becomes exactly one
//! [`EnrichedRecord`], in input order.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::constants::{ENRICHMENT_COLUMNS, UNKNOWN_ATTRIBUTE, UNMATCHED_USE_CASE};
use crate::types::table::{CellValue, Table};

/// The six attributes copied from a lookup entry onto a ticket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EnrichmentAttributes {
    pub use_case: String,
    pub automation_feasibility: String,
    pub automation_approach: String,
    pub left_shift_feasibility: String,
    pub elimination_feasibility: String,
    /// Ticket tier classification (L1 / L1.5 / L2)
    pub tier: String,
}

impl EnrichmentAttributes {
    /// Defaults assigned to tickets that matched no keyword
    pub fn unmatched() -> Self {
        Self {
            use_case: UNMATCHED_USE_CASE.to_string(),
            automation_feasibility: UNKNOWN_ATTRIBUTE.to_string(),
            automation_approach: UNKNOWN_ATTRIBUTE.to_string(),
            left_shift_feasibility: UNKNOWN_ATTRIBUTE.to_string(),
            elimination_feasibility: UNKNOWN_ATTRIBUTE.to_string(),
            tier: UNKNOWN_ATTRIBUTE.to_string(),
        }
    }
}

/// One catalogue row, keyed by its normalized keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LookupEntry {
    /// Keyword as written in the catalogue (trimmed, original casing)
    pub keyword: String,
    /// Trimmed, lower-cased keyword used as the catalogue key
    pub normalized_keyword: String,
    /// Zero-based data-row index in the catalogue sheet
    pub lookup_index: usize,
    pub attributes: EnrichmentAttributes,
}

/// Outcome of matching one description against the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MatchResult {
    /// Normalized keyword that was accepted
    pub keyword: String,
    /// Confidence in `[0.5, 1.0]`
    pub score: f64,
    /// Position of the chosen entry in the deduplicated catalogue
    pub entry_index: usize,
}

/// A ticket row plus its enrichment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EnrichedRecord {
    /// Zero-based row index in the source table
    pub row_index: usize,
    /// Source cells, aligned with [`EnrichedTable::source_headers`]
    pub fields: Vec<CellValue>,
    /// Catalogue keyword in original casing; empty when unmatched
    pub matched_keyword: String,
    pub match_score: f64,
    pub matched: bool,
    pub attributes: EnrichmentAttributes,
}

impl EnrichedRecord {
    /// Source cell at `col`, or an empty cell when out of range
    pub fn field(&self, col: usize) -> CellValue {
        self.fields.get(col).cloned().unwrap_or_default()
    }
}

/// Enriched ticket table: source headers plus one record per source row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EnrichedTable {
    pub source_headers: Vec<String>,
    pub records: Vec<EnrichedRecord>,
}

impl EnrichedTable {
    pub fn new(source_headers: Vec<String>, records: Vec<EnrichedRecord>) -> Self {
        Self { source_headers, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose match failed, in original relative order
    pub fn unmatched(&self) -> impl Iterator<Item = &EnrichedRecord> + '_ {
        self.records.iter().filter(|r| !r.matched)
    }

    /// Flatten into a sheet: source columns followed by the enrichment columns
    ///
    /// A source column named like an enrichment column is overwritten in
    /// place, so a previously exported sheet never carries stale duplicates.
    pub fn to_table(&self) -> Table {
        let mut headers = self.source_headers.clone();
        let mut slots = Vec::with_capacity(ENRICHMENT_COLUMNS.len());
        for name in ENRICHMENT_COLUMNS {
            match headers.iter().position(|h| h == name) {
                Some(col) => slots.push(col),
                None => {
                    slots.push(headers.len());
                    headers.push(name.to_string());
                }
            }
        }
        let width = headers.len();

        let mut table = Table::new(headers);
        for record in &self.records {
            let mut row = record.fields.clone();
            row.resize(self.source_headers.len(), CellValue::Empty);
            row.resize(width, CellValue::Empty);
            let attrs = &record.attributes;
            let values = [
                CellValue::from(record.matched_keyword.as_str()),
                CellValue::Number(crate::utils::numeric::round_to(record.match_score, 2)),
                CellValue::from(attrs.use_case.as_str()),
                CellValue::from(attrs.automation_feasibility.as_str()),
                CellValue::from(attrs.automation_approach.as_str()),
                CellValue::from(attrs.left_shift_feasibility.as_str()),
                CellValue::from(attrs.elimination_feasibility.as_str()),
                CellValue::from(attrs.tier.as_str()),
            ];
            for (col, value) in slots.iter().zip(values) {
                row[*col] = value;
            }
            table.push_row(row);
        }
        table
    }
}

/// One audited match decision kept in the run log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MatchSample {
    pub input_index: usize,
    pub matched_subgroup: String,
    pub match_score: f64,
    pub lookup_row_id: usize,
}

/// Counts and a sample of decisions from one enrichment pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RunLog {
    pub run_id: Uuid,
    pub total_rows: usize,
    pub matched_count: usize,
    pub unmatched_count: usize,
    pub distinct_keywords: usize,
    pub first_matches: Vec<MatchSample>,
}

impl RunLog {
    /// Matched rows as a percentage of all rows (0 for an empty table)
    pub fn match_rate(&self) -> f64 {
        crate::utils::numeric::safe_divide(
            self.matched_count as f64 * 100.0,
            self.total_rows as f64,
            0.0,
        )
    }
}

/// Everything enrichment hands to the downstream engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EnrichmentOutcome {
    pub enriched: EnrichedTable,
    pub unmatched: EnrichedTable,
    pub log: RunLog,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row_index: usize, matched: bool) -> EnrichedRecord {
        EnrichedRecord {
            row_index,
            fields: vec![CellValue::from(format!("ticket {row_index}"))],
            matched_keyword: if matched { "Password Reset".into() } else { String::new() },
            match_score: if matched { 0.876 } else { 0.0 },
            matched,
            attributes: if matched {
                EnrichmentAttributes { tier: "L1.5".into(), ..EnrichmentAttributes::default() }
            } else {
                EnrichmentAttributes::unmatched()
            },
        }
    }

    #[test]
    fn test_unmatched_defaults() {
        let attrs = EnrichmentAttributes::unmatched();
        assert_eq!(attrs.use_case, "Others");
        assert_eq!(attrs.automation_feasibility, "Unknown");
        assert_eq!(attrs.left_shift_feasibility, "Unknown");
        assert_eq!(attrs.elimination_feasibility, "Unknown");
        assert_eq!(attrs.tier, "Unknown");
    }

    #[test]
    fn test_to_table_appends_enrichment_columns() {
        let table = EnrichedTable::new(
            vec!["Description".into()],
            vec![record(0, true), record(1, false)],
        );
        let sheet = table.to_table();
        assert_eq!(sheet.headers().len(), 9);
        assert_eq!(sheet.headers()[1], "Matched_Keyword");
        assert_eq!(sheet.headers()[8], "L1_L2");
        assert_eq!(sheet.cell(0, 2), &CellValue::Number(0.88));
        assert_eq!(sheet.cell(1, 3), &CellValue::from("Others"));
    }

    #[test]
    fn test_to_table_overwrites_same_named_source_columns() {
        let mut stale = record(0, true);
        stale.fields = vec![
            CellValue::from("password reset"),
            CellValue::from("Others"),
            CellValue::from("Unknown"),
        ];
        let table = EnrichedTable::new(
            vec!["Description".into(), "UseCase".into(), "L1_L2".into()],
            vec![stale],
        );
        let sheet = table.to_table();

        assert_eq!(sheet.headers().len(), 9);
        assert_eq!(sheet.headers().iter().filter(|h| *h == "UseCase").count(), 1);
        assert_eq!(sheet.headers()[2], "L1_L2");
        assert_eq!(sheet.cell(0, 1), &CellValue::from(""));
        assert_eq!(sheet.cell(0, 2), &CellValue::from("L1.5"));
        assert_eq!(sheet.headers()[3], "Matched_Keyword");
        assert_eq!(sheet.cell(0, 3), &CellValue::from("Password Reset"));
    }

    #[test]
    fn test_unmatched_iterator_preserves_order() {
        let table = EnrichedTable::new(
            vec!["Description".into()],
            vec![record(0, false), record(1, true), record(2, false)],
        );
        let rows: Vec<usize> = table.unmatched().map(|r| r.row_index).collect();
        assert_eq!(rows, vec![0, 2]);
    }

    #[test]
    fn test_match_rate_handles_empty_run() {
        let log = RunLog {
            run_id: Uuid::nil(),
            total_rows: 0,
            matched_count: 0,
            unmatched_count: 0,
            distinct_keywords: 0,
            first_matches: vec![],
        };
        assert_eq!(log.match_rate(), 0.0);
        let log = RunLog { total_rows: 4, matched_count: 3, ..log };
        assert!((log.match_rate() - 75.0).abs() < 1e-9);
    }
}
