//! Validation of non-ticketed effort allocations

use autooptix_domain::{
    ActivityAllocation, AutoOptixError, NonTicketedAllocation, NonTicketedRange, Result,
};
use tracing::debug;

/// Sum the per-activity percentages and accept the total when it lies
/// inside `range` (inclusive) and is non-zero
///
/// # Errors
/// Returns `AutoOptixError::InvalidInput` for a negative entry, a zero
/// total, or a total outside the selected range.
pub fn validate_allocation(
    range: NonTicketedRange,
    entries: &[ActivityAllocation],
) -> Result<NonTicketedAllocation> {
    if let Some(bad) = entries.iter().find(|e| e.percentage < 0.0 || !e.percentage.is_finite()) {
        return Err(AutoOptixError::InvalidInput(format!(
            "{} percentage must be a non-negative number, got {}",
            bad.activity, bad.percentage
        )));
    }

    let total: f64 = entries.iter().map(|e| e.percentage).sum();
    debug!(range = %range, total, "Validating non-ticketed allocation");

    if total == 0.0 {
        return Err(AutoOptixError::InvalidInput(
            "Non-ticketed allocation total must be greater than zero".to_string(),
        ));
    }
    if !range.contains(total) {
        let (min, max) = range.bounds();
        return Err(AutoOptixError::InvalidInput(format!(
            "Total {total}% is outside range {range} ({min}-{max})"
        )));
    }

    Ok(NonTicketedAllocation { range, entries: entries.to_vec(), total })
}

#[cfg(test)]
mod tests {
    use autooptix_domain::Activity;

    use super::*;

    fn entry(activity: Activity, percentage: f64) -> ActivityAllocation {
        ActivityAllocation { activity, percentage }
    }

    #[test]
    fn test_total_inside_range_is_accepted() {
        let entries = [entry(Activity::Monitoring, 10.0), entry(Activity::HealthCheck, 10.0)];
        let allocation = validate_allocation(NonTicketedRange::From10To20, &entries).unwrap();
        assert_eq!(allocation.total, 20.0);
        assert_eq!(allocation.entries.len(), 2);
    }

    #[test]
    fn test_lower_bound_inclusive() {
        let entries = [entry(Activity::Reporting, 30.0)];
        assert!(validate_allocation(NonTicketedRange::From30To50, &entries).is_ok());
    }

    #[test]
    fn test_total_outside_range_rejected() {
        let entries = [entry(Activity::Monitoring, 12.0)];
        let err = validate_allocation(NonTicketedRange::UpTo5, &entries).unwrap_err();
        assert!(matches!(err, AutoOptixError::InvalidInput(_)));
        assert!(err.to_string().contains("0%-5%"));
    }

    #[test]
    fn test_zero_total_rejected_even_in_lowest_range() {
        let entries = [entry(Activity::Others, 0.0)];
        assert!(validate_allocation(NonTicketedRange::UpTo5, &entries).is_err());
        assert!(validate_allocation(NonTicketedRange::UpTo5, &[]).is_err());
    }

    #[test]
    fn test_negative_entry_rejected() {
        let entries = [entry(Activity::Coordination, -2.0), entry(Activity::Monitoring, 8.0)];
        let err = validate_allocation(NonTicketedRange::UpTo5, &entries).unwrap_err();
        assert!(err.to_string().contains("Coordination"));
    }
}
