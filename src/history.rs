//! Citability history.
//!
//! Storage is a collaborator the caller invokes after a result has been
//! computed. A failed save is logged and reported back as `false`; it
//! never touches the result the caller already holds.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::citability::CitabilityResult;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitabilityRecord {
    pub site_id: String,
    pub title: String,
    pub content: String,
    pub overall_score: i32,
    pub paragraph_count: usize,
    pub quotable_count: usize,
    pub result: CitabilityResult,
}

impl CitabilityRecord {
    pub fn new(site_id: &str, title: &str, content: &str, result: &CitabilityResult) -> Self {
        Self {
            site_id: site_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            overall_score: result.overall_score,
            paragraph_count: result.paragraph_scores.len(),
            quotable_count: result.quotable_count(),
            result: result.clone(),
        }
    }
}

pub trait CitabilityStore {
    fn save(&mut self, record: CitabilityRecord) -> Result<()>;
}

/// Records kept in memory, grouped by site id in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCitabilityStore {
    records: HashMap<String, Vec<CitabilityRecord>>,
}

impl InMemoryCitabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records_for(&self, site_id: &str) -> &[CitabilityRecord] {
        self.records
            .get(site_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn latest_for(&self, site_id: &str) -> Option<&CitabilityRecord> {
        self.records_for(site_id).last()
    }
}

impl CitabilityStore for InMemoryCitabilityStore {
    fn save(&mut self, record: CitabilityRecord) -> Result<()> {
        self.records
            .entry(record.site_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }
}

/// Save a computed result. Returns whether the store accepted it.
pub fn record_citability<S: CitabilityStore + ?Sized>(
    store: &mut S,
    site_id: &str,
    title: &str,
    content: &str,
    result: &CitabilityResult,
) -> bool {
    let record = CitabilityRecord::new(site_id, title, content, result);
    match store.save(record) {
        Ok(()) => {
            debug!(site_id, overall_score = result.overall_score, "citability recorded");
            true
        }
        Err(err) => {
            warn!(site_id, error = %err, "failed to record citability history");
            false
        }
    }
}
