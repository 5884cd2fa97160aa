//! Enrichment engine
//!
//! Joins a ticket table against the keyword catalogue. Every input row
//! produces exactly one [`EnrichedRecord`], in input order; rows whose
//! description matches nothing receive the unmatched defaults.

use autooptix_domain::{
    AutoOptixError, EnrichedRecord, EnrichedTable, EnrichmentAttributes, EnrichmentOutcome,
    MatchSample, Result, RunLog, Table, TableKind,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::catalogue::Catalogue;
use crate::columns::ColumnResolver;

const DESCRIPTION: &[&str] = &["description"];

/// Enrich every ticket row against `catalogue`
///
/// `sample_size` bounds the number of match decisions kept in the run log,
/// which is stamped with `run_id`.
///
/// # Errors
/// Returns `AutoOptixError::MissingColumn` when the ticket table has no
/// description column. No row is processed in that case.
pub fn enrich(
    tickets: &Table,
    catalogue: &Catalogue,
    sample_size: usize,
    run_id: Uuid,
) -> Result<EnrichmentOutcome> {
    let desc_col = ColumnResolver::strict()
        .resolve(tickets.headers(), DESCRIPTION)
        .ok_or_else(|| AutoOptixError::missing_column(TableKind::Input, "description"))?;

    let mut records = Vec::with_capacity(tickets.len());
    let mut samples = Vec::new();

    for (row_index, row) in tickets.rows().iter().enumerate() {
        let description = tickets.cell(row_index, desc_col).to_text();
        let description = description.trim();

        let hit = catalogue
            .match_description(description)
            .and_then(|found| catalogue.entry(found.entry_index).map(|entry| (entry, found.score)));

        let record = match hit {
            Some((entry, score)) => {
                if samples.len() < sample_size {
                    samples.push(MatchSample {
                        input_index: row_index,
                        matched_subgroup: entry.keyword.clone(),
                        match_score: score,
                        lookup_row_id: entry.lookup_index,
                    });
                }
                EnrichedRecord {
                    row_index,
                    fields: row.clone(),
                    matched_keyword: entry.keyword.clone(),
                    match_score: score,
                    matched: true,
                    attributes: entry.attributes.clone(),
                }
            }
            None => EnrichedRecord {
                row_index,
                fields: row.clone(),
                matched_keyword: String::new(),
                match_score: 0.0,
                matched: false,
                attributes: EnrichmentAttributes::unmatched(),
            },
        };
        records.push(record);
    }

    let headers = tickets.headers().to_vec();
    let unmatched_records: Vec<EnrichedRecord> =
        records.iter().filter(|r| !r.matched).cloned().collect();
    let matched_count = records.len() - unmatched_records.len();

    let log = RunLog {
        run_id,
        total_rows: records.len(),
        matched_count,
        unmatched_count: unmatched_records.len(),
        distinct_keywords: catalogue.len(),
        first_matches: samples,
    };

    info!(
        run_id = %log.run_id,
        total_rows = log.total_rows,
        matched = log.matched_count,
        unmatched = log.unmatched_count,
        keywords = log.distinct_keywords,
        "Enrichment complete"
    );
    debug!(match_rate = log.match_rate(), "Enrichment match rate");

    Ok(EnrichmentOutcome {
        enriched: EnrichedTable::new(headers.clone(), records),
        unmatched: EnrichedTable::new(headers, unmatched_records),
        log,
    })
}
