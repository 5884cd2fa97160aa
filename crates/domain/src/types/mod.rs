//! Domain types and models

pub mod enrichment;
pub mod metrics;
pub mod non_ticketed;
pub mod report;
pub mod resource_load;
pub mod table;
pub mod tools;
pub mod utilization;

pub use enrichment::{
    EnrichedRecord, EnrichedTable, EnrichmentAttributes, EnrichmentOutcome, LookupEntry,
    MatchResult, MatchSample, RunLog,
};
pub use metrics::{Lever, LeverSnapshot, LeverSummaryRow, MetricsSnapshot};
pub use non_ticketed::{
    Activity, ActivityAllocation, NonTicketedAllocation, NonTicketedNote, NonTicketedRange,
};
pub use report::{AnalysisReport, RunSummary};
pub use resource_load::{Grade, GradeRow, GradeTable, Horizon, ResourceLoad, ResourceProjection};
pub use table::{CellValue, Table, TableKind};
pub use tools::{ToolIndicators, ToolRecommendation};
pub use utilization::{UtilizationBreakdown, UtilizationShare};
