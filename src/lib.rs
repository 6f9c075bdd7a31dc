//! On-page content scoring.
//!
//! Deterministic, rule-based analyzers that score a piece of written
//! content and its metadata: focus-keyword placement, heading structure,
//! link mix, readability, paragraph citability, and a weighted checklist
//! that rolls them up. Every analyzer is a pure function of its input and
//! every score lands in `[0, 100]`.

use std::collections::HashSet;

use serde::Serialize;

pub mod checklist;
pub mod citability;
pub mod error;
pub mod history;
pub mod keyword;
pub mod links;
pub mod normalize;
pub mod readability;
pub mod report;
pub mod structure;
pub mod weights;

pub use checklist::ChecklistResult;
pub use citability::{CitabilityResult, ParagraphScore};
pub use error::{Result, ScoreError};
pub use history::{record_citability, CitabilityRecord, CitabilityStore, InMemoryCitabilityStore};
pub use keyword::{AnalysisRequest, KeywordAnalysisResult, KeywordPlacement};
pub use links::LinkCounts;
pub use normalize::{normalize, Normalized};
pub use readability::{ReadabilityGrade, ReadabilityResult};
pub use report::{ContentReport, ReportCache};
pub use structure::ContentStructureResult;
pub use weights::ScoringWeights;

// ---------------------------------------------------------------------------
// Shared types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Ok,
    Poor,
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// A scoring table plus the site domain used to tell internal links from
/// external ones. Cheap to clone; holds no mutable state.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoringWeights,
    site_domain: Option<String>,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            site_domain: None,
        }
    }

    pub fn with_site_domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        self.site_domain = if domain.trim().is_empty() {
            None
        } else {
            Some(domain)
        };
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn site_domain(&self) -> Option<&str> {
        self.site_domain.as_deref()
    }

    pub fn keyword_placement(&self, request: &AnalysisRequest) -> KeywordAnalysisResult {
        keyword::analyze(request, &self.weights)
    }

    pub fn content_structure(&self, content: &str) -> ContentStructureResult {
        structure::analyze(content)
    }

    pub fn links(&self, content: &str) -> LinkCounts {
        links::count(content, self.site_domain())
    }

    pub fn readability(&self, content: &str) -> ReadabilityResult {
        readability::score(content, &self.weights)
    }

    pub fn citability(&self, content: &str, title: Option<&str>) -> CitabilityResult {
        citability::analyze(content, title, &self.weights)
    }

    pub fn checklist(&self, request: &AnalysisRequest, keywords_list: &str) -> ChecklistResult {
        let keyword = self.keyword_placement(request);
        let structure = self.content_structure(&request.content);
        let links = self.links(&request.content);
        let readability = self.readability(&request.content);
        checklist::compute(
            request,
            keywords_list,
            checklist::Signals {
                keyword: &keyword,
                structure: &structure,
                links: &links,
                readability: &readability,
            },
            &self.weights,
        )
    }

    /// Run every analyzer once and collect the results.
    pub fn analyze(&self, request: &AnalysisRequest) -> ContentReport {
        let keyword = self.keyword_placement(request);
        let structure = self.content_structure(&request.content);
        let links = self.links(&request.content);
        let readability = self.readability(&request.content);
        let citability = self.citability(&request.content, Some(&request.title));
        let checklist = checklist::compute(
            request,
            &request.keywords_list,
            checklist::Signals {
                keyword: &keyword,
                structure: &structure,
                links: &links,
                readability: &readability,
            },
            &self.weights,
        );
        ContentReport {
            keyword,
            structure,
            links,
            readability,
            citability,
            checklist,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn analyze_keyword_placement(request: &AnalysisRequest) -> KeywordAnalysisResult {
    keyword::analyze(request, ScoringWeights::defaults())
}

pub fn analyze_content_structure(content: &str) -> ContentStructureResult {
    structure::analyze(content)
}

/// Counts with no site domain configured: only root-relative links are
/// internal.
pub fn count_links(content: &str) -> LinkCounts {
    links::count(content, None)
}

pub fn count_links_for_site(content: &str, site_domain: &str) -> LinkCounts {
    links::count(content, Some(site_domain))
}

pub fn score_readability(content: &str) -> ReadabilityResult {
    readability::score(content, ScoringWeights::defaults())
}

pub fn analyze_citability(content: &str, title: Option<&str>) -> CitabilityResult {
    citability::analyze(content, title, ScoringWeights::defaults())
}

pub fn compute_checklist_score(request: &AnalysisRequest, keywords_list: &str) -> ChecklistResult {
    Scorer::default().checklist(request, keywords_list)
}

pub fn analyze(request: &AnalysisRequest) -> ContentReport {
    Scorer::default().analyze(request)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn clamp_score(score: i32) -> i32 {
    score.clamp(0, 100)
}

pub(crate) fn deduplicate(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            unique.push(item);
        }
    }
    unique
}
