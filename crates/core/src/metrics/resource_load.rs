//! Resource-load projection and the grade-wise roster

use autooptix_domain::constants::{
    GRADE_TABLE_MONTHS, NON_TICKETED_BASELINE_PCT, PARTIAL_AUTOMATION_SHARE,
    TICKETS_PER_FTE_MONTH,
};
use autooptix_domain::{
    safe_divide, Grade, GradeRow, GradeTable, Horizon, MetricsSnapshot, NonTicketedNote,
    ResourceLoad, ResourceProjection,
};
use tracing::{debug, info};

/// Unadjusted load for the three horizons
///
/// H1Y1 is not clamped; H2Y1 and H1Y2 never drop below zero.
pub fn baseline_load(metrics: &MetricsSnapshot) -> (f64, ResourceLoad) {
    let base_rl = safe_divide(metrics.l1_5_per_month, TICKETS_PER_FTE_MONTH, 0.0);
    let elimination = metrics.elimination.fte;
    let automation = metrics.automation_standard.fte + metrics.automation_agentic.fte;

    let load = ResourceLoad {
        h1y1: base_rl - elimination,
        h2y1: (base_rl - elimination - PARTIAL_AUTOMATION_SHARE * automation).max(0.0),
        h1y2: (base_rl - elimination - automation).max(0.0),
    };
    (base_rl, load)
}

/// Inflate H1Y1 by the non-ticketed share above the 15% baseline
///
/// At or below the baseline the load is returned unchanged. H2Y1 and H1Y2
/// are never adjusted.
pub fn adjust_for_non_ticketed(load: ResourceLoad, non_ticketed_pct: f64) -> ResourceLoad {
    if non_ticketed_pct <= NON_TICKETED_BASELINE_PCT {
        return load;
    }
    let excess = non_ticketed_pct - NON_TICKETED_BASELINE_PCT;
    ResourceLoad { h1y1: load.h1y1 + load.h1y1 * excess / 100.0, ..load }
}

/// Headcount for one roster tier at resource load `rl`
///
/// SA uses strict comparisons at 50 and 25 while SM and M use inclusive
/// ones.
pub fn grade_value(grade: Grade, rl: f64) -> f64 {
    match grade {
        Grade::Sm => {
            if rl >= 150.0 {
                1.0
            } else {
                0.0
            }
        }
        Grade::M => {
            if rl >= 100.0 {
                2.0
            } else if rl >= 50.0 {
                1.0
            } else {
                0.0
            }
        }
        Grade::Sa => {
            if rl >= 150.0 {
                4.0
            } else if rl >= 100.0 {
                3.0
            } else if rl > 50.0 {
                2.0
            } else if rl > 25.0 {
                1.0
            } else {
                0.0
            }
        }
        Grade::A => rl * 0.10,
        Grade::PaP => rl * 0.60,
        Grade::PatPt => rl * 0.30,
    }
}

/// Six tiers by eighteen months, six months per horizon
pub fn grade_table(load: &ResourceLoad) -> GradeTable {
    let rows = Grade::ALL
        .iter()
        .map(|&grade| GradeRow {
            grade,
            months: (1..=GRADE_TABLE_MONTHS)
                .filter_map(Horizon::for_month)
                .map(|horizon| grade_value(grade, load.get(horizon)))
                .collect(),
        })
        .collect();
    GradeTable { rows }
}

/// Project staffing load and the grade table from one metrics snapshot
pub fn project(metrics: &MetricsSnapshot, non_ticketed_pct: Option<f64>) -> ResourceProjection {
    let (base_rl, baseline) = baseline_load(metrics);
    let load = match non_ticketed_pct {
        Some(pct) => adjust_for_non_ticketed(baseline, pct),
        None => baseline,
    };
    let note = non_ticketed_pct.map(NonTicketedNote::classify);

    debug!(base_rl, h1y1 = baseline.h1y1, h2y1 = baseline.h2y1, h1y2 = baseline.h1y2, "Baseline load");
    info!(
        h1y1 = load.h1y1,
        h2y1 = load.h2y1,
        h1y2 = load.h1y2,
        non_ticketed_pct = non_ticketed_pct.unwrap_or(0.0),
        note = note.map(|n| n.to_string()).unwrap_or_default(),
        "Resource load projected"
    );

    ResourceProjection {
        base_rl,
        baseline,
        load,
        non_ticketed_pct,
        note,
        grade_table: grade_table(&load),
    }
}
