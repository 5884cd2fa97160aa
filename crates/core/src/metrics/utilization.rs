//! Lever shares for proportion-style displays

use autooptix_domain::constants::TICKETS_PER_FTE_MONTH;
use autooptix_domain::{safe_divide, MetricsSnapshot, UtilizationBreakdown, UtilizationShare};
use tracing::warn;

/// Express elimination and both automation levers as shares of the L1.5
/// baseline
///
/// With no L1.5 tickets the base divisor falls back to 1, so values are the
/// raw FTE figures rather than true ratios.
pub fn normalize(metrics: &MetricsSnapshot) -> UtilizationBreakdown {
    let mut base_divisor = safe_divide(metrics.l1_5_per_month, TICKETS_PER_FTE_MONTH, 0.0);
    if base_divisor == 0.0 {
        warn!("Zero L1.5 volume; utilization values fall back to raw FTE");
        base_divisor = 1.0;
    }

    let elimination = safe_divide(metrics.elimination.fte, base_divisor, 0.0);
    let standard = safe_divide(metrics.automation_standard.fte, base_divisor, 0.0);
    let agentic = safe_divide(metrics.automation_agentic.fte, base_divisor, 0.0);
    let total = elimination + standard + agentic;

    let share = |value: f64| UtilizationShare {
        value,
        percentage: safe_divide(value * 100.0, total, 0.0),
    };

    UtilizationBreakdown {
        base_divisor,
        elimination: share(elimination),
        automation_standard: share(standard),
        automation_agentic: share(agentic),
        total,
    }
}
