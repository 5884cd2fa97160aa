//! Analysis service - one full enrichment and metrics pass

use std::sync::Arc;

use autooptix_domain::constants::DEFAULT_MATCH_SAMPLE_SIZE;
use autooptix_domain::{
    ActivityAllocation, AnalysisReport, AutoOptixError, EnrichmentOutcome, NonTicketedRange,
    Result, Table,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::enrichment::{enrich, Catalogue, LookupCatalogueSource};
use crate::metrics::{compute_metrics, normalize, project, recommend};
use crate::non_ticketed::validate_allocation;

/// Runs enrichment, metrics, projection, utilization and tool
/// recommendations over one ticket table
///
/// The catalogue is loaded from the source once per run. The service holds
/// no mutable state, so independent runs may execute concurrently.
pub struct AnalysisService {
    catalogue_source: Arc<dyn LookupCatalogueSource>,
    sample_size: usize,
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(catalogue_source: Arc<dyn LookupCatalogueSource>) -> Self {
        Self { catalogue_source, sample_size: DEFAULT_MATCH_SAMPLE_SIZE }
    }

    /// Number of match decisions kept in the run log
    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Load the catalogue and enrich `tickets` under a fresh run id
    ///
    /// # Errors
    /// Fails when the catalogue cannot be loaded or either table lacks its
    /// required column.
    pub fn enrich(&self, tickets: &Table) -> Result<EnrichmentOutcome> {
        let lookup = self.catalogue_source.load_catalogue()?;
        let catalogue = Catalogue::from_table(&lookup)?;
        info!(
            source = %self.catalogue_source.describe(),
            keywords = catalogue.len(),
            "Lookup catalogue loaded"
        );
        enrich(tickets, &catalogue, self.sample_size, Uuid::now_v7())
    }

    /// Perform one full pass
    ///
    /// # Errors
    /// Configuration errors (missing catalogue, missing description or
    /// subgroup column, non-ticketed percentage outside 0-100) abort the run.
    /// A missing priority column only drops the tool recommendations.
    pub fn run(&self, tickets: &Table, non_ticketed_pct: Option<f64>) -> Result<AnalysisReport> {
        if let Some(pct) = non_ticketed_pct {
            if !(0.0..=100.0).contains(&pct) {
                return Err(AutoOptixError::Config(format!(
                    "Non-ticketed percentage must be between 0 and 100, got {pct}"
                )));
            }
        }

        let enrichment = self.enrich(tickets)?;
        Ok(analyze(enrichment, non_ticketed_pct))
    }

    /// Perform one full pass with the non-ticketed share taken from a
    /// per-activity allocation
    ///
    /// # Errors
    /// Returns `AutoOptixError::InvalidInput` when the allocation is rejected;
    /// the catalogue is not loaded in that case. Otherwise as [`Self::run`].
    pub fn run_with_allocation(
        &self,
        tickets: &Table,
        range: NonTicketedRange,
        entries: &[ActivityAllocation],
    ) -> Result<AnalysisReport> {
        let allocation = validate_allocation(range, entries)?;
        info!(
            range = %allocation.range,
            activities = allocation.entries.len(),
            total = allocation.total,
            "Non-ticketed allocation accepted"
        );
        self.run(tickets, Some(allocation.total))
    }
}

/// Derive every downstream output from a completed enrichment
pub fn analyze(enrichment: EnrichmentOutcome, non_ticketed_pct: Option<f64>) -> AnalysisReport {
    let metrics = compute_metrics(&enrichment.enriched);
    let projection = project(&metrics, non_ticketed_pct);
    let utilization = normalize(&metrics);
    let tools = match recommend(&enrichment.enriched) {
        Ok(tools) => Some(tools),
        Err(e) => {
            warn!(error = %e, kind = e.label(), "Tool recommendations unavailable");
            None
        }
    };

    AnalysisReport {
        generated_at: Utc::now(),
        enrichment,
        metrics,
        projection,
        utilization,
        tools,
    }
}
