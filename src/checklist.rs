//! The headline checklist score.
//!
//! Each criterion earns full, partial or no points from the scoring table;
//! the overall score is achieved points as a percentage of the maximum.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::keyword::{AnalysisRequest, KeywordAnalysisResult};
use crate::links::LinkCounts;
use crate::normalize;
use crate::readability::ReadabilityResult;
use crate::structure::ContentStructureResult;
use crate::weights::ScoringWeights;
use crate::Status;

pub const TITLE_LENGTH: &str = "titleLength";
pub const META_DESCRIPTION_LENGTH: &str = "metaDescriptionLength";
pub const SLUG_LENGTH: &str = "slugLength";
pub const KEYWORD_COUNT: &str = "keywordCount";
pub const FEATURED_IMAGE: &str = "featuredImage";
pub const CONTENT_LENGTH: &str = "contentLength";
pub const FOCUS_KEYWORD: &str = "focusKeyword";
pub const INTERNAL_LINKS: &str = "internalLinks";
pub const EXTERNAL_LINKS: &str = "externalLinks";
pub const HEADING_STRUCTURE: &str = "headingStructure";
pub const READABILITY: &str = "readability";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResult {
    pub overall_score: i32,
    pub criteria_achieved: BTreeMap<String, u32>,
    pub achieved_points: u32,
    pub max_points: u32,
}

/// Outputs of the individual analyzers the checklist draws on.
pub(crate) struct Signals<'a> {
    pub keyword: &'a KeywordAnalysisResult,
    pub structure: &'a ContentStructureResult,
    pub links: &'a LinkCounts,
    pub readability: &'a ReadabilityResult,
}

pub(crate) fn compute(
    request: &AnalysisRequest,
    keywords_list: &str,
    signals: Signals<'_>,
    w: &ScoringWeights,
) -> ChecklistResult {
    let title_len = request.title.trim().chars().count();
    let meta_len = request.meta_description.trim().chars().count();
    let slug_len = request.slug.trim().chars().count();
    let keyword_count = parse_keywords(keywords_list).len();
    let content_words = normalize::normalize(&request.content).word_count();

    let mut criteria = BTreeMap::new();

    criteria.insert(
        TITLE_LENGTH.to_string(),
        banded(
            title_len,
            w.checklist_title_min_chars,
            w.checklist_title_max_chars,
            w.checklist_title_points,
            w.checklist_title_partial,
        ),
    );
    criteria.insert(
        META_DESCRIPTION_LENGTH.to_string(),
        banded(
            meta_len,
            w.checklist_meta_min_chars,
            w.checklist_meta_max_chars,
            w.checklist_meta_points,
            w.checklist_meta_partial,
        ),
    );
    criteria.insert(
        SLUG_LENGTH.to_string(),
        banded(
            slug_len,
            1,
            w.checklist_slug_max_chars,
            w.checklist_slug_points,
            w.checklist_slug_partial,
        ),
    );
    criteria.insert(
        KEYWORD_COUNT.to_string(),
        banded(
            keyword_count,
            w.checklist_keywords_min,
            w.checklist_keywords_max,
            w.checklist_keywords_points,
            w.checklist_keywords_partial,
        ),
    );
    criteria.insert(
        FEATURED_IMAGE.to_string(),
        if request.featured_image.trim().is_empty() {
            0
        } else {
            w.checklist_image_points
        },
    );
    criteria.insert(
        CONTENT_LENGTH.to_string(),
        if content_words >= w.checklist_content_full_words {
            w.checklist_content_points
        } else if content_words >= w.checklist_content_partial_words {
            w.checklist_content_partial
        } else {
            0
        },
    );
    criteria.insert(
        FOCUS_KEYWORD.to_string(),
        scaled_keyword_points(signals.keyword.score, w.checklist_focus_keyword_points),
    );
    criteria.insert(
        INTERNAL_LINKS.to_string(),
        banded(
            signals.links.internal,
            w.checklist_internal_min,
            w.checklist_internal_max,
            w.checklist_internal_points,
            w.checklist_internal_partial,
        ),
    );
    criteria.insert(
        EXTERNAL_LINKS.to_string(),
        banded(
            signals.links.external,
            w.checklist_external_min,
            w.checklist_external_max,
            w.checklist_external_points,
            w.checklist_external_partial,
        ),
    );
    criteria.insert(
        HEADING_STRUCTURE.to_string(),
        if signals.structure.h2_count >= w.checklist_h2_full_min
            && signals.structure.has_proper_hierarchy
        {
            w.checklist_headings_points
        } else if signals.structure.h2_count >= 1 {
            w.checklist_headings_partial
        } else {
            0
        },
    );
    criteria.insert(
        READABILITY.to_string(),
        match signals.readability.status {
            Status::Good => w.checklist_readability_good,
            Status::Ok => w.checklist_readability_ok,
            Status::Poor => 0,
        },
    );

    let achieved_points = criteria
        .values()
        .fold(0u32, |acc, points| acc.saturating_add(*points));
    let max_points = w.checklist_max_points();
    let overall_score = percentage(achieved_points, max_points);

    debug!(achieved_points, max_points, overall_score, "checklist computed");

    ChecklistResult {
        overall_score,
        criteria_achieved: criteria,
        achieved_points,
        max_points,
    }
}

/// Comma-separated keywords, trimmed, empties dropped.
pub fn parse_keywords(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect()
}

/// Full points inside `[min, max]`, partial points for any other non-zero
/// value, nothing for zero.
fn banded(value: usize, min: usize, max: usize, full: u32, partial: u32) -> u32 {
    if value >= min && value <= max && value > 0 {
        full
    } else if value > 0 {
        partial
    } else {
        0
    }
}

fn scaled_keyword_points(keyword_score: i32, max: u32) -> u32 {
    let fraction = keyword_score.clamp(0, 100) as f64 / 100.0;
    (fraction * max as f64).round() as u32
}

fn percentage(achieved: u32, max: u32) -> i32 {
    if max == 0 {
        return 0;
    }
    let pct = (achieved as f64 / max as f64 * 100.0).round() as i32;
    pct.clamp(0, 100)
}
