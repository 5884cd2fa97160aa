//! Non-ticketed effort allocation
//!
//! Teams estimate how much of their time goes to work that never shows up as
//! a ticket. The estimate is entered per activity and must land inside a
//! declared range before it feeds the resource-load adjustment.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::NON_TICKETED_BASELINE_PCT;
use crate::impl_label_conversions;

/// Declared band for the non-ticketed share of effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum NonTicketedRange {
    UpTo5,
    From5To10,
    From10To20,
    From20To30,
    From30To50,
    From50To100,
}

impl_label_conversions!(NonTicketedRange {
    UpTo5 => "0%-5%",
    From5To10 => "5%-10%",
    From10To20 => "10%-20%",
    From20To30 => "20%-30%",
    From30To50 => "30%-50%",
    From50To100 => "50%-100%",
});

impl NonTicketedRange {
    /// Inclusive `(min, max)` percentage bounds
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::UpTo5 => (0.0, 5.0),
            Self::From5To10 => (5.0, 10.0),
            Self::From10To20 => (10.0, 20.0),
            Self::From20To30 => (20.0, 30.0),
            Self::From30To50 => (30.0, 50.0),
            Self::From50To100 => (50.0, 100.0),
        }
    }

    pub fn contains(self, pct: f64) -> bool {
        let (min, max) = self.bounds();
        pct >= min && pct <= max
    }
}

/// Category of non-ticketed work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Activity {
    Monitoring,
    HealthCheck,
    Reporting,
    Coordination,
    MimDefectRelease,
    Others,
}

impl_label_conversions!(Activity {
    Monitoring => "Monitoring",
    HealthCheck => "Health Check",
    Reporting => "Reporting",
    Coordination => "Coordination",
    MimDefectRelease => "MIM / Defect mgmt / Release Mgmt Calls",
    Others => "Others",
});

impl Activity {
    /// How the activity could be optimized
    pub const fn feasibility(self) -> &'static str {
        match self {
            Self::Monitoring | Self::Reporting => "Automation Feasible",
            Self::HealthCheck => "Elimination",
            Self::MimDefectRelease => "Partial Automation",
            Self::Coordination | Self::Others => "Not Feasible",
        }
    }
}

/// Percentage of effort entered for one activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ActivityAllocation {
    pub activity: Activity,
    pub percentage: f64,
}

/// An accepted allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NonTicketedAllocation {
    pub range: NonTicketedRange,
    pub entries: Vec<ActivityAllocation>,
    /// Sum of entry percentages; the value the projector consumes
    pub total: f64,
}

/// How the projector treats a non-ticketed total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "kind", content = "excess", rename_all = "snake_case")]
pub enum NonTicketedNote {
    /// At or below the baseline share; load unchanged
    IncludedInBaseline,
    /// Percentage points above the baseline added to H1Y1
    ExcessAdded(f64),
}

impl NonTicketedNote {
    pub fn classify(pct: f64) -> Self {
        if pct > NON_TICKETED_BASELINE_PCT {
            Self::ExcessAdded(pct - NON_TICKETED_BASELINE_PCT)
        } else {
            Self::IncludedInBaseline
        }
    }
}

impl std::fmt::Display for NonTicketedNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncludedInBaseline => f.write_str("Non-ticketed effort is included in the baseline"),
            Self::ExcessAdded(excess) => {
                write!(f, "Excess non-ticketed effort of {excess:.1}% added to H1Y1")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(NonTicketedRange::From10To20.contains(10.0));
        assert!(NonTicketedRange::From10To20.contains(20.0));
        assert!(!NonTicketedRange::From10To20.contains(20.5));
        assert_eq!("50%-100%".parse::<NonTicketedRange>().unwrap(), NonTicketedRange::From50To100);
    }

    #[test]
    fn test_activity_feasibility() {
        assert_eq!(Activity::HealthCheck.feasibility(), "Elimination");
        assert_eq!(Activity::Monitoring.feasibility(), "Automation Feasible");
        assert_eq!(Activity::MimDefectRelease.feasibility(), "Partial Automation");
        assert_eq!(Activity::Others.feasibility(), "Not Feasible");
        assert_eq!(Activity::ALL.len(), 6);
    }

    #[test]
    fn test_note_classification() {
        assert_eq!(NonTicketedNote::classify(15.0), NonTicketedNote::IncludedInBaseline);
        assert_eq!(NonTicketedNote::classify(20.0), NonTicketedNote::ExcessAdded(5.0));
        assert_eq!(
            NonTicketedNote::classify(20.0).to_string(),
            "Excess non-ticketed effort of 5.0% added to H1Y1"
        );
    }
}
