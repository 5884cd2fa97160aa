//! Per-lever counts, volumes and FTE figures

use ahash::AHashSet;
use autooptix_domain::constants::{
    APPROACH_AGENTIC, APPROACH_STANDARD, APPROACH_STANDARD_OR_AGENTIC, FEASIBLE,
    TICKETS_PER_FTE_MONTH, TIER_L1_5, TIER_L2,
};
use autooptix_domain::{
    normalize_value, safe_divide, value_is, EnrichedRecord, EnrichedTable, EnrichmentAttributes,
    LeverSnapshot, MetricsSnapshot,
};
use tracing::{debug, info, warn};

use crate::columns::ColumnResolver;

const CLOSED_MONTH: &[&str] = &["Closed Month", "Month", "Month Resolved"];

/// Distinct non-blank closed-month values, or 1 when there are none
///
/// Values are compared on trimmed text. A table without a closed-month
/// column counts as a single month.
pub fn count_months(enriched: &EnrichedTable) -> usize {
    let Some(col) = ColumnResolver::extended().resolve(&enriched.source_headers, CLOSED_MONTH)
    else {
        warn!("No closed-month column found; treating data as a single month");
        return 1;
    };

    let months: AHashSet<String> = enriched
        .records
        .iter()
        .map(|r| r.field(col).to_text().trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();
    months.len().max(1)
}

fn is_l1_5(attrs: &EnrichmentAttributes) -> bool {
    value_is(&attrs.tier, TIER_L1_5)
}

fn eliminates(attrs: &EnrichmentAttributes) -> bool {
    is_l1_5(attrs) && value_is(&attrs.elimination_feasibility, FEASIBLE)
}

fn automates_standard(attrs: &EnrichmentAttributes) -> bool {
    is_l1_5(attrs)
        && value_is(&attrs.automation_feasibility, FEASIBLE)
        && matches!(
            normalize_value(&attrs.automation_approach).as_deref(),
            Some(APPROACH_STANDARD | APPROACH_STANDARD_OR_AGENTIC)
        )
}

fn automates_agentic(attrs: &EnrichmentAttributes) -> bool {
    is_l1_5(attrs)
        && value_is(&attrs.automation_feasibility, FEASIBLE)
        && value_is(&attrs.automation_approach, APPROACH_AGENTIC)
}

fn shifts_left(attrs: &EnrichmentAttributes) -> bool {
    is_l1_5(attrs) && value_is(&attrs.left_shift_feasibility, FEASIBLE)
}

fn lever_snapshot(
    records: &[EnrichedRecord],
    num_months: usize,
    predicate: fn(&EnrichmentAttributes) -> bool,
) -> LeverSnapshot {
    let qualifying: Vec<&EnrichedRecord> =
        records.iter().filter(|r| predicate(&r.attributes)).collect();
    let usecases: AHashSet<&str> = qualifying
        .iter()
        .map(|r| r.attributes.use_case.as_str())
        .filter(|u| !u.trim().is_empty())
        .collect();

    let volume = safe_divide(qualifying.len() as f64, num_months as f64, 0.0);
    LeverSnapshot {
        usecases: usecases.len(),
        ticket_count: qualifying.len(),
        volume,
        fte: safe_divide(volume, TICKETS_PER_FTE_MONTH, 0.0),
    }
}

/// Compute every lever snapshot for one enriched table
pub fn compute_metrics(enriched: &EnrichedTable) -> MetricsSnapshot {
    let num_months = count_months(enriched);
    let records = enriched.records.as_slice();

    let total_l1_5 = records.iter().filter(|r| is_l1_5(&r.attributes)).count();
    let total_l2 = records.iter().filter(|r| value_is(&r.attributes.tier, TIER_L2)).count();

    let snapshot = MetricsSnapshot {
        num_months,
        total_rows: records.len(),
        total_l1_5,
        total_l2,
        l1_5_per_month: safe_divide(total_l1_5 as f64, num_months as f64, 0.0),
        elimination: lever_snapshot(records, num_months, eliminates),
        automation_standard: lever_snapshot(records, num_months, automates_standard),
        automation_agentic: lever_snapshot(records, num_months, automates_agentic),
        left_shift: lever_snapshot(records, num_months, shifts_left),
    };

    debug!(
        elimination_fte = snapshot.elimination.fte,
        automation_fte = snapshot.automation_standard.fte,
        agentic_fte = snapshot.automation_agentic.fte,
        left_shift_fte = snapshot.left_shift.fte,
        "Lever FTE figures"
    );
    info!(
        rows = snapshot.total_rows,
        months = num_months,
        l1_5 = total_l1_5,
        l2 = total_l2,
        "Metrics computed"
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use autooptix_domain::CellValue;

    use super::*;

    fn record(month: &str, tier: &str, elim: &str, auto: &str, approach: &str, use_case: &str) -> EnrichedRecord {
        EnrichedRecord {
            row_index: 0,
            fields: vec![CellValue::from(month)],
            matched_keyword: "kw".into(),
            match_score: 1.0,
            matched: true,
            attributes: EnrichmentAttributes {
                use_case: use_case.into(),
                automation_feasibility: auto.into(),
                automation_approach: approach.into(),
                left_shift_feasibility: "Not Feasible".into(),
                elimination_feasibility: elim.into(),
                tier: tier.into(),
            },
        }
    }

    fn table(records: Vec<EnrichedRecord>) -> EnrichedTable {
        EnrichedTable::new(vec!["Closed Month".into()], records)
    }

    #[test]
    fn test_months_counted_on_trimmed_text() {
        let t = table(vec![
            record("Jan", "L1.5", "", "", "", "a"),
            record(" Jan ", "L1.5", "", "", "", "a"),
            record("Feb", "L1.5", "", "", "", "a"),
            record("", "L1.5", "", "", "", "a"),
        ]);
        assert_eq!(count_months(&t), 2);
    }

    #[test]
    fn test_missing_or_empty_month_column_counts_one() {
        let t = EnrichedTable::new(vec!["Ticket".into()], vec![record("x", "L1.5", "", "", "", "a")]);
        assert_eq!(count_months(&t), 1);
        assert_eq!(count_months(&table(vec![record("", "L2", "", "", "", "a")])), 1);
        assert_eq!(count_months(&table(vec![])), 1);
    }

    #[test]
    fn test_lever_predicates_require_l1_5() {
        let t = table(vec![
            record("Jan", " l1.5 ", "FEASIBLE", "Feasible", "Standard", "A"),
            record("Jan", "L1.5", "Feasible", "Feasible", "Standard/Agentic AI", "B"),
            record("Feb", "L1.5", "Not Feasible", "Feasible", "Agentic AI", "C"),
            record("Feb", "L2", "Feasible", "Feasible", "Standard", "D"),
        ]);
        let m = compute_metrics(&t);
        assert_eq!(m.num_months, 2);
        assert_eq!(m.total_l1_5, 3);
        assert_eq!(m.total_l2, 1);
        assert_eq!(m.l1_5_per_month, 1.5);

        assert_eq!(m.elimination.ticket_count, 2);
        assert_eq!(m.elimination.usecases, 2);
        assert_eq!(m.elimination.volume, 1.0);
        assert_eq!(m.elimination.fte, 1.0 / 140.0);

        assert_eq!(m.automation_standard.ticket_count, 2);
        assert_eq!(m.automation_agentic.ticket_count, 1);
        assert_eq!(m.automation_agentic.volume, 0.5);
        assert_eq!(m.left_shift.ticket_count, 0);
    }

    #[test]
    fn test_blank_values_match_nothing() {
        let t = table(vec![record("Jan", "", "", "", "", "")]);
        let m = compute_metrics(&t);
        assert_eq!(m.total_l1_5, 0);
        assert_eq!(m.elimination, LeverSnapshot::default());
    }

    #[test]
    fn test_usecases_are_distinct() {
        let t = table(vec![
            record("Jan", "L1.5", "Feasible", "", "", "Access"),
            record("Jan", "L1.5", "Feasible", "", "", "Access"),
            record("Jan", "L1.5", "Feasible", "", "", ""),
        ]);
        let m = compute_metrics(&t);
        assert_eq!(m.elimination.ticket_count, 3);
        assert_eq!(m.elimination.usecases, 1);
    }

    #[test]
    fn test_metrics_are_idempotent() {
        let t = table(vec![
            record("Jan", "L1.5", "Feasible", "Feasible", "Agentic AI", "A"),
            record("Mar", "L1.5", "Feasible", "Feasible", "Standard", "B"),
        ]);
        assert_eq!(compute_metrics(&t), compute_metrics(&t));
    }
}
