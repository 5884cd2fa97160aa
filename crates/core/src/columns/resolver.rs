//! Column resolution over loosely named spreadsheet headers
//!
//! Uploaded sheets spell the same logical field many ways ("Closed Month",
//! "closed_month", "Month Resolved"). A [`ColumnResolver`] maps a list of
//! candidate names, in priority order, to the first matching header.
//!
//! Two modes exist:
//! - [`ResolveMode::Strict`] compares trimmed, lower-cased text
//! - [`ResolveMode::Extended`] also strips every non-alphanumeric character
//!   and expands each candidate through a [`SynonymTable`]

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]").expect("NON_ALNUM should compile - this is a bug"));

/// How headers and candidates are normalized before comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    Strict,
    Extended,
}

/// Adds alternative spellings when every trigger fragment occurs in a
/// normalized candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymRule {
    triggers: Vec<String>,
    expansions: Vec<String>,
}

impl SynonymRule {
    pub fn new<T, E>(triggers: T, expansions: E) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            expansions: expansions.into_iter().map(Into::into).collect(),
        }
    }

    fn fires_on(&self, normalized: &str) -> bool {
        !self.triggers.is_empty() && self.triggers.iter().all(|t| normalized.contains(t.as_str()))
    }
}

/// Injectable synonym expansions for the extended mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymTable {
    rules: Vec<SynonymRule>,
}

impl SynonymTable {
    /// A table with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: SynonymRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[SynonymRule] {
        &self.rules
    }

    /// Expansions contributed by every rule that fires on `normalized`
    pub fn expand(&self, normalized: &str) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.fires_on(normalized))
            .flat_map(|rule| rule.expansions.iter().map(String::as_str))
            .collect()
    }
}

impl Default for SynonymTable {
    /// Spellings seen across exported ticket and catalogue sheets
    fn default() -> Self {
        const APPROACH: [&str; 4] =
            ["stdagentic", "automationapproach", "automationtype", "standardagentic"];

        Self::empty()
            .with_rule(SynonymRule::new(
                ["l1", "l2"],
                ["l1l2", "l1l2level", "ticketlevel", "tickettype"],
            ))
            .with_rule(SynonymRule::new(
                ["closed", "month"],
                ["closedmonth", "closemonth", "month", "monthclosed", "monthresolved"],
            ))
            .with_rule(SynonymRule::new(
                ["elim"],
                ["eliminationfeasibility", "eliminationfeasible", "caneliminate"],
            ))
            .with_rule(SynonymRule::new(
                ["autom", "feasib"],
                ["automationfeasibility", "automationfeasible", "canautomated"],
            ))
            .with_rule(SynonymRule::new(["std"], APPROACH))
            .with_rule(SynonymRule::new(["agentic"], APPROACH))
            .with_rule(SynonymRule::new(["approach"], APPROACH))
            .with_rule(SynonymRule::new(
                ["left", "shift"],
                ["leftshift", "leftshiftfeasibility", "leftshiftfeasible", "canleftshift"],
            ))
            .with_rule(SynonymRule::new(
                ["use", "case"],
                ["usecase", "usecases", "casename", "caseid"],
            ))
    }
}

/// Locates logical fields among table headers
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    mode: ResolveMode,
    synonyms: SynonymTable,
}

impl ColumnResolver {
    /// Lower-case and trim only
    pub fn strict() -> Self {
        Self { mode: ResolveMode::Strict, synonyms: SynonymTable::empty() }
    }

    /// Alphanumeric-only comparison with the default synonym table
    pub fn extended() -> Self {
        Self::with_synonyms(SynonymTable::default())
    }

    /// Alphanumeric-only comparison with a caller-supplied synonym table
    pub fn with_synonyms(synonyms: SynonymTable) -> Self {
        Self { mode: ResolveMode::Extended, synonyms }
    }

    pub fn mode(&self) -> ResolveMode {
        self.mode
    }

    /// Normalize a header or candidate name for comparison
    pub fn normalize(&self, name: &str) -> String {
        let lowered = name.trim().to_lowercase();
        match self.mode {
            ResolveMode::Strict => lowered,
            ResolveMode::Extended => NON_ALNUM.replace_all(&lowered, "").into_owned(),
        }
    }

    /// Normalized forms to look for, in priority order, without duplicates
    fn search_terms(&self, candidates: &[&str]) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        let mut push = |term: &str| {
            if !term.is_empty() && !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        };

        for candidate in candidates {
            let normalized = self.normalize(candidate);
            push(&normalized);
            if self.mode == ResolveMode::Extended {
                for expansion in self.synonyms.expand(&normalized) {
                    push(expansion);
                }
            }
        }
        terms
    }

    /// Index of the first header matching any candidate
    ///
    /// Candidates are tried in order; for each one, headers are scanned left
    /// to right. `None` means the field is absent, which callers decide
    /// whether to treat as fatal.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S], candidates: &[&str]) -> Option<usize> {
        let normalized_headers: Vec<String> =
            headers.iter().map(|h| self.normalize(h.as_ref())).collect();

        self.search_terms(candidates)
            .iter()
            .find_map(|term| normalized_headers.iter().position(|h| h == term))
    }

    /// Header text of the first match, as written in the table
    pub fn resolve_header<'h, S: AsRef<str>>(
        &self,
        headers: &'h [S],
        candidates: &[&str],
    ) -> Option<&'h str> {
        self.resolve(headers, candidates).map(|idx| headers[idx].as_ref())
    }
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_strict_ignores_case_and_padding() {
        let resolver = ColumnResolver::strict();
        let cols = headers(&["Ticket ID", "  Description ", "Priority"]);
        assert_eq!(resolver.resolve(&cols, &["description"]), Some(1));
        assert_eq!(resolver.resolve_header(&cols, &["PRIORITY"]), Some("Priority"));
    }

    #[test]
    fn test_strict_keeps_punctuation() {
        let resolver = ColumnResolver::strict();
        let cols = headers(&["Closed_Month"]);
        assert_eq!(resolver.resolve(&cols, &["closed month"]), None);
    }

    #[test]
    fn test_candidate_priority_beats_header_order() {
        let resolver = ColumnResolver::strict();
        let cols = headers(&["L2", "L1/L2"]);
        assert_eq!(resolver.resolve(&cols, &["l1/l2", "l1", "l2"]), Some(1));
    }

    #[test]
    fn test_first_header_wins_on_duplicate_names() {
        let resolver = ColumnResolver::strict();
        let cols = headers(&["Subgroup", "SUBGROUP"]);
        assert_eq!(resolver.resolve(&cols, &["subgroup"]), Some(0));
    }

    #[test]
    fn test_extended_strips_punctuation() {
        let resolver = ColumnResolver::extended();
        let cols = headers(&["Closed_Month", "L1/L2"]);
        assert_eq!(resolver.resolve(&cols, &["Closed Month"]), Some(0));
        assert_eq!(resolver.resolve(&cols, &["L1_L2"]), Some(1));
    }

    #[test]
    fn test_extended_synonyms() {
        let resolver = ColumnResolver::extended();
        assert_eq!(resolver.resolve(&headers(&["Month Resolved"]), &["Closed Month"]), Some(0));
        assert_eq!(resolver.resolve(&headers(&["Ticket Type"]), &["L1/L2"]), Some(0));
        assert_eq!(resolver.resolve(&headers(&["Std/Agentic"]), &["Automation Approach"]), Some(0));
        assert_eq!(resolver.resolve(&headers(&["Can Left Shift"]), &["Left Shift"]), Some(0));
        assert_eq!(resolver.resolve(&headers(&["Case Name"]), &["Use Case"]), Some(0));
    }

    #[test]
    fn test_extended_prefers_direct_candidate_over_synonym() {
        let resolver = ColumnResolver::extended();
        let cols = headers(&["Month", "Closed Month"]);
        assert_eq!(resolver.resolve(&cols, &["Closed Month"]), Some(1));
    }

    #[test]
    fn test_injected_synonyms() {
        let table = SynonymTable::empty().with_rule(SynonymRule::new(["desc"], ["summary"]));
        let resolver = ColumnResolver::with_synonyms(table);
        assert_eq!(resolver.resolve(&headers(&["Summary"]), &["Description"]), Some(0));
        assert_eq!(resolver.resolve(&headers(&["Month Resolved"]), &["Closed Month"]), None);
    }

    #[test]
    fn test_not_found_is_none() {
        let resolver = ColumnResolver::extended();
        assert_eq!(resolver.resolve(&headers(&["A", "B"]), &["priority"]), None);
        assert_eq!(resolver.resolve::<String>(&[], &["priority"]), None);
    }
}
