//! The combined report and a memoizing cache for it.
//!
//! Every analysis is a pure function of its request, so an editor that
//! re-runs the engine on each keystroke can skip the work whenever the
//! request hashes the same as one it has already seen.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::checklist::ChecklistResult;
use crate::citability::CitabilityResult;
use crate::keyword::{AnalysisRequest, KeywordAnalysisResult};
use crate::links::LinkCounts;
use crate::readability::ReadabilityResult;
use crate::structure::ContentStructureResult;
use crate::Scorer;

const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    pub keyword: KeywordAnalysisResult,
    pub structure: ContentStructureResult,
    pub links: LinkCounts,
    pub readability: ReadabilityResult,
    pub citability: CitabilityResult,
    pub checklist: ChecklistResult,
}

/// Hex SHA-256 over every request field. Fields are length-prefixed so
/// moving text from one field into its neighbour changes the key.
pub fn request_key(request: &AnalysisRequest) -> String {
    let mut h = Sha256::new();
    for field in [
        &request.content,
        &request.title,
        &request.slug,
        &request.meta_description,
        &request.focus_keyword,
        &request.image_alt,
        &request.keywords_list,
        &request.featured_image,
    ] {
        h.update((field.len() as u64).to_le_bytes());
        h.update(field.as_bytes());
    }
    hex::encode(h.finalize())
}

/// FIFO-bounded map from request hash to report.
///
/// A cache is tied to one scorer configuration; reports computed under
/// different weights or site domains must not share a cache.
#[derive(Debug)]
pub struct ReportCache {
    capacity: usize,
    entries: HashMap<String, ContentReport>,
    order: VecDeque<String>,
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl ReportCache {
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn get(&self, request: &AnalysisRequest) -> Option<&ContentReport> {
        self.entries.get(&request_key(request))
    }

    pub fn get_or_analyze(&mut self, scorer: &Scorer, request: &AnalysisRequest) -> ContentReport {
        let key = request_key(request);
        if let Some(report) = self.entries.get(&key) {
            debug!(key = %key, "report cache hit");
            return report.clone();
        }

        debug!(key = %key, "report cache miss");
        let report = scorer.analyze(request);
        self.insert(key, report.clone());
        report
    }

    fn insert(&mut self, key: String, report: ContentReport) {
        while self.order.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, report);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
