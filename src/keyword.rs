//! Focus-keyword placement and density.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize;
use crate::weights::ScoringWeights;
use crate::{clamp_score, Status};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// One evaluation's worth of content and metadata, as the editor supplies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub content: String,
    pub title: String,
    pub slug: String,
    pub meta_description: String,
    pub focus_keyword: String,
    pub image_alt: String,
    /// Comma-separated target keywords.
    pub keywords_list: String,
    pub featured_image: String,
}

/// Which of the six zones contain the focus keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordPlacement {
    pub title: bool,
    pub slug: bool,
    pub meta_description: bool,
    pub first_paragraph: bool,
    pub headings: bool,
    pub image_alt: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysisResult {
    pub placements: KeywordPlacement,
    /// Percentage of words taken by the keyword phrase, two decimals.
    pub density: f64,
    pub word_count: usize,
    pub keyword_occurrences: usize,
    pub score: i32,
    pub status: Status,
}

impl KeywordAnalysisResult {
    fn empty(word_count: usize) -> Self {
        Self {
            placements: KeywordPlacement::default(),
            density: 0.0,
            word_count,
            keyword_occurrences: 0,
            score: 0,
            status: Status::Poor,
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

pub(crate) fn analyze(request: &AnalysisRequest, w: &ScoringWeights) -> KeywordAnalysisResult {
    let keyword = normalize_keyword(&request.focus_keyword);
    if keyword.is_empty() {
        return KeywordAnalysisResult::empty(0);
    }

    let normalized = normalize::normalize(&request.content);
    let word_count = normalized.word_count();
    let phrase_words = keyword.split(' ').count();

    let occurrences = count_occurrences(&normalized.plain_text, &keyword);
    let density = keyword_density(occurrences, phrase_words, word_count);

    let headings = normalize::heading_texts(&request.content).join(" ");
    let placements = KeywordPlacement {
        title: contains_ci(&request.title, &keyword),
        slug: contains_ci(&request.slug, &keyword.replace(' ', "-")),
        meta_description: contains_ci(&request.meta_description, &keyword),
        first_paragraph: contains_ci(&normalize::first_paragraph(&request.content), &keyword),
        headings: contains_ci(&headings, &keyword),
        image_alt: contains_ci(&request.image_alt, &keyword),
    };

    let score = placement_score(&placements, density, w);
    let status = status_for_score(score, w);

    debug!(
        keyword = %keyword,
        word_count,
        occurrences,
        density,
        score,
        "keyword placement analyzed"
    );

    KeywordAnalysisResult {
        placements,
        density,
        word_count,
        keyword_occurrences: occurrences,
        score,
        status,
    }
}

/// Placement points plus the density adjustment, clamped to [0, 100].
pub fn placement_score(placements: &KeywordPlacement, density: f64, w: &ScoringWeights) -> i32 {
    let zones = [
        (placements.title, w.keyword_title_points),
        (placements.slug, w.keyword_slug_points),
        (placements.meta_description, w.keyword_meta_description_points),
        (placements.first_paragraph, w.keyword_first_paragraph_points),
        (placements.headings, w.keyword_headings_points),
        (placements.image_alt, w.keyword_image_alt_points),
    ];
    let mut score = zones
        .iter()
        .filter(|(hit, _)| *hit)
        .fold(0i32, |acc, (_, points)| acc.saturating_add(*points));

    if density >= w.density_natural_min && density <= w.density_natural_max {
        score = score.saturating_add(w.density_natural_bonus);
    } else if density > w.density_natural_max {
        score = score.saturating_add(w.density_stuffing_penalty);
    }
    clamp_score(score)
}

/// `occurrences * phrase_words / total_words * 100`, rounded to two
/// decimals; zero when there are no words.
pub fn keyword_density(occurrences: usize, phrase_words: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    let raw = (occurrences * phrase_words) as f64 / total_words as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

fn status_for_score(score: i32, w: &ScoringWeights) -> Status {
    if score >= w.keyword_good_min {
        Status::Good
    } else if score >= w.keyword_ok_min {
        Status::Ok
    } else {
        Status::Poor
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Trimmed, lowercased, single-spaced.
fn normalize_keyword(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-overlapping, case-insensitive phrase matches. Words of the phrase
/// may be separated by any run of whitespace in the text.
fn count_occurrences(text: &str, keyword: &str) -> usize {
    let pattern = keyword
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    match Regex::new(&format!("(?i){pattern}")) {
        Ok(re) => re.find_iter(text).count(),
        Err(_) => 0,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(needle)
}
