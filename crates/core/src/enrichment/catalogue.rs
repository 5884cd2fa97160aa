//! Deduplicated keyword catalogue

use ahash::AHashSet;
use autooptix_domain::{
    AutoOptixError, CellValue, EnrichmentAttributes, LookupEntry, MatchResult, Result, Table,
    TableKind,
};
use tracing::warn;

use crate::columns::ColumnResolver;
use crate::matching::find_first_match;

const SUBGROUP: &[&str] = &["subgroup"];
const USE_CASE: &[&str] = &["usecase", "use case"];
const AUTOMATION_FEASIBILITY: &[&str] = &["automation feasibility"];
const AUTOMATION_APPROACH: &[&str] = &["automation approach"];
const LEFT_SHIFT_FEASIBILITY: &[&str] = &["left shift feasibility"];
const ELIMINATION_FEASIBILITY: &[&str] = &["elimination feasibility"];
const TIER: &[&str] = &["l1/l2", "l1", "l2"];

/// Lookup entries keyed by normalized keyword, in catalogue order
///
/// Built once per run and read-only afterwards. Duplicate keywords keep
/// their first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    entries: Vec<LookupEntry>,
    keywords: Vec<String>,
}

/// Optional attribute columns located in the catalogue sheet
struct AttributeColumns {
    use_case: Option<usize>,
    automation_feasibility: Option<usize>,
    automation_approach: Option<usize>,
    left_shift_feasibility: Option<usize>,
    elimination_feasibility: Option<usize>,
    tier: Option<usize>,
}

impl AttributeColumns {
    fn locate(resolver: &ColumnResolver, headers: &[String]) -> Self {
        let find = |field: &str, candidates: &[&str]| {
            let found = resolver.resolve(headers, candidates);
            if found.is_none() {
                warn!(field, "Lookup catalogue has no column for attribute; values default to empty");
            }
            found
        };

        Self {
            use_case: find("usecase", USE_CASE),
            automation_feasibility: find("automation feasibility", AUTOMATION_FEASIBILITY),
            automation_approach: find("automation approach", AUTOMATION_APPROACH),
            left_shift_feasibility: find("left shift feasibility", LEFT_SHIFT_FEASIBILITY),
            elimination_feasibility: find("elimination feasibility", ELIMINATION_FEASIBILITY),
            tier: find("l1/l2", TIER),
        }
    }

    fn read(&self, row: &[CellValue]) -> EnrichmentAttributes {
        let text = |col: Option<usize>| {
            col.and_then(|c| row.get(c)).map(CellValue::to_text).unwrap_or_default()
        };

        EnrichmentAttributes {
            use_case: text(self.use_case),
            automation_feasibility: text(self.automation_feasibility),
            automation_approach: text(self.automation_approach),
            left_shift_feasibility: text(self.left_shift_feasibility),
            elimination_feasibility: text(self.elimination_feasibility),
            tier: text(self.tier),
        }
    }
}

impl Catalogue {
    /// Build the catalogue from a lookup sheet
    ///
    /// # Errors
    /// Returns `AutoOptixError::MissingColumn` when the sheet has no
    /// `subgroup` column.
    pub fn from_table(table: &Table) -> Result<Self> {
        let resolver = ColumnResolver::strict();
        let subgroup_col = resolver
            .resolve(table.headers(), SUBGROUP)
            .ok_or_else(|| AutoOptixError::missing_column(TableKind::Lookup, "subgroup"))?;
        let columns = AttributeColumns::locate(&resolver, table.headers());

        let mut seen: AHashSet<String> = AHashSet::new();
        let mut entries = Vec::new();
        for (lookup_index, row) in table.rows().iter().enumerate() {
            let raw = table.cell(lookup_index, subgroup_col).to_text();
            let keyword = raw.trim();
            if keyword.is_empty() {
                continue;
            }
            let normalized_keyword = keyword.to_lowercase();
            if !seen.insert(normalized_keyword.clone()) {
                continue;
            }
            entries.push(LookupEntry {
                keyword: keyword.to_string(),
                normalized_keyword,
                lookup_index,
                attributes: columns.read(row),
            });
        }

        let keywords = entries.iter().map(|e| e.normalized_keyword.clone()).collect();
        Ok(Self { entries, keywords })
    }

    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    /// Normalized keywords in priority order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First entry, in catalogue order, whose keyword matches `description`
    pub fn match_description(&self, description: &str) -> Option<MatchResult> {
        let found = find_first_match(description, &self.keywords)?;
        self.keywords.get(found.index).map(|keyword| MatchResult {
            keyword: keyword.clone(),
            score: found.score,
            entry_index: found.index,
        })
    }

    pub fn entry(&self, index: usize) -> Option<&LookupEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(rows: Vec<Vec<&str>>) -> Table {
        Table::with_rows(
            ["Subgroup", "UseCase", "L1/L2", "Elimination Feasibility"],
            rows.into_iter().map(|r| r.into_iter().map(CellValue::from).collect()).collect(),
        )
    }

    #[test]
    fn test_first_occurrence_wins() {
        let table = lookup(vec![
            vec!["Password Reset", "Access", "L1.5", "Feasible"],
            vec!["password reset ", "Duplicate", "L2", "Not Feasible"],
            vec!["VPN", "Network", "L2", ""],
        ]);
        let catalogue = Catalogue::from_table(&table).unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.keywords(), &["password reset".to_string(), "vpn".to_string()]);
        let first = catalogue.entry(0).unwrap();
        assert_eq!(first.keyword, "Password Reset");
        assert_eq!(first.attributes.use_case, "Access");
        assert_eq!(catalogue.entry(1).unwrap().lookup_index, 2);
    }

    #[test]
    fn test_match_description_points_at_first_qualifying_entry() {
        let table = lookup(vec![
            vec!["Disk", "Storage", "L1.5", ""],
            vec!["Password Reset", "Access", "L1.5", "Feasible"],
            vec!["Reset", "Generic", "L2", ""],
        ]);
        let catalogue = Catalogue::from_table(&table).unwrap();

        let found = catalogue.match_description("user asked for a password reset").unwrap();
        assert_eq!(found.keyword, "password reset");
        assert_eq!(found.entry_index, 1);
        assert_eq!(found.score, 1.0);
        assert_eq!(catalogue.entry(found.entry_index).unwrap().attributes.use_case, "Access");

        assert!(catalogue.match_description("printer jam").is_none());
        assert!(catalogue.match_description("").is_none());
    }

    #[test]
    fn test_blank_keywords_skipped() {
        let table = lookup(vec![vec!["  ", "X", "L1", ""], vec!["Disk", "Storage", "L1.5", ""]]);
        let catalogue = Catalogue::from_table(&table).unwrap();
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.entry(0).unwrap().lookup_index, 1);
    }

    #[test]
    fn test_missing_attribute_columns_default_to_empty() {
        let table = lookup(vec![vec!["Disk", "Storage", "L1.5", "Feasible"]]);
        let catalogue = Catalogue::from_table(&table).unwrap();
        let attrs = &catalogue.entries()[0].attributes;
        assert_eq!(attrs.tier, "L1.5");
        assert_eq!(attrs.elimination_feasibility, "Feasible");
        assert_eq!(attrs.automation_feasibility, "");
        assert_eq!(attrs.left_shift_feasibility, "");
    }

    #[test]
    fn test_missing_subgroup_is_configuration_error() {
        let table = Table::with_rows(["Keyword"], vec![vec!["x".into()]]);
        let err = Catalogue::from_table(&table).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err, AutoOptixError::missing_column(TableKind::Lookup, "subgroup"));
    }
}
