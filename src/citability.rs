//! Paragraph-level citability: how likely each paragraph is to be quoted
//! verbatim by an answer engine, judged from length, specificity and
//! phrasing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::normalize;
use crate::weights::ScoringWeights;
use crate::{clamp_score, deduplicate};

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\$?\d+(?:[.,]\d+)*\s*(?:%|percent\b|x\b|times\b|million\b|billion\b|thousand\b|k\b|kg\b|km\b|mb\b|gb\b|ms\b|hours?\b|minutes?\b|days?\b|weeks?\b|months?\b|years?\b)?",
    )
    .unwrap()
});

static DEFINITIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:is|are|means|defined as|refers to|consists of)\b").unwrap()
});

static CLARIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:this means|in other words|for example|specifically|in summary)\b")
        .unwrap()
});

static VAGUE_QUALIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:very|really|quite|somewhat|basically|actually|literally|generally|usually)\b",
    )
    .unwrap()
});

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphScore {
    pub text: String,
    pub word_count: usize,
    pub score: i32,
    pub issues: Vec<String>,
    pub quotable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitabilityResult {
    pub overall_score: i32,
    pub paragraph_scores: Vec<ParagraphScore>,
    pub recommendations: Vec<String>,
}

impl CitabilityResult {
    pub fn quotable_count(&self) -> usize {
        self.paragraph_scores.iter().filter(|p| p.quotable).count()
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

pub(crate) fn analyze(markup: &str, title: Option<&str>, w: &ScoringWeights) -> CitabilityResult {
    let paragraphs = normalize::normalize(markup).paragraphs;
    if paragraphs.is_empty() {
        debug!(title = title.unwrap_or_default(), "no paragraphs to score");
        return CitabilityResult::default();
    }

    let paragraph_scores: Vec<ParagraphScore> = paragraphs
        .into_iter()
        .map(|p| score_paragraph(p, w))
        .collect();

    let total: f64 = paragraph_scores.iter().map(|p| f64::from(p.score)).sum();
    let mean = total / paragraph_scores.len() as f64;
    let overall_score = clamp_score(mean.round() as i32);
    let recommendations = recommend(&paragraph_scores, overall_score, w);

    debug!(
        title = title.unwrap_or_default(),
        paragraphs = paragraph_scores.len(),
        overall_score,
        "citability analyzed"
    );

    CitabilityResult {
        overall_score,
        paragraph_scores,
        recommendations,
    }
}

pub fn score_paragraph(text: String, w: &ScoringWeights) -> ParagraphScore {
    let word_count = normalize::words(&text).len();
    let mut score = w.citability_baseline;
    let mut issues = Vec::new();

    if word_count < w.citability_short_max_words {
        score = score.saturating_add(w.citability_short_penalty);
        issues.push(format!(
            "Too short ({word_count} words); aim for {}-{} words",
            w.citability_optimal_min_words, w.citability_optimal_max_words
        ));
    } else if word_count < w.citability_optimal_min_words {
        score = score.saturating_add(w.citability_brief_penalty);
        issues.push(format!(
            "Could be more comprehensive ({word_count} words)"
        ));
    } else if word_count > w.citability_long_max_words {
        score = score.saturating_add(w.citability_too_long_penalty);
        issues.push(format!(
            "Too long for AI quoting ({word_count} words); split into focused paragraphs"
        ));
    } else if word_count > w.citability_optimal_max_words {
        score = score.saturating_add(w.citability_long_penalty);
        issues.push(format!("Slightly long ({word_count} words)"));
    }

    if NUMBER_RE.is_match(&text) {
        score = score.saturating_add(w.citability_number_bonus);
    } else {
        score = score.saturating_add(w.citability_no_number_penalty);
        issues.push("No specific numbers or statistics".to_string());
    }

    if DEFINITIVE_RE.is_match(&text) {
        score = score.saturating_add(w.citability_definitive_bonus);
    }

    if text.contains('?') {
        score = score.saturating_add(w.citability_question_bonus);
    }

    if CLARIFIER_RE.is_match(&text) {
        score = score.saturating_add(w.citability_clarifier_bonus);
    } else if word_count > w.citability_clarifier_hint_min_words {
        issues.push(
            "Add self-contained phrasing such as \"this means\" or \"for example\"".to_string(),
        );
    }

    let vague = VAGUE_QUALIFIER_RE.find_iter(&text).count();
    if vague > w.citability_vague_max_free {
        let vague_count = i32::try_from(vague).unwrap_or(i32::MAX);
        score = score.saturating_add(w.citability_vague_penalty_each.saturating_mul(vague_count));
        issues.push(format!("Contains vague qualifiers ({vague})"));
    }

    let score = clamp_score(score);
    ParagraphScore {
        text,
        word_count,
        score,
        issues,
        quotable: score >= w.citability_quotable_min,
    }
}

fn recommend(paragraphs: &[ParagraphScore], overall_score: i32, w: &ScoringWeights) -> Vec<String> {
    let mut recs = Vec::new();

    let short = paragraphs
        .iter()
        .filter(|p| p.word_count < w.citability_recommend_expand_words)
        .count();
    if short * 2 > paragraphs.len() {
        recs.push(format!(
            "Expand short paragraphs toward {}-{} words so each can stand alone as an answer",
            w.citability_optimal_min_words, w.citability_optimal_max_words
        ));
    }

    if paragraphs
        .iter()
        .any(|p| p.word_count > w.citability_recommend_break_words)
    {
        recs.push(format!(
            "Break up paragraphs longer than {} words into focused sections",
            w.citability_recommend_break_words
        ));
    }

    if paragraphs
        .iter()
        .any(|p| p.score < w.citability_recommend_data_below)
    {
        recs.push("Add specific data, numbers or statistics to low-scoring paragraphs".to_string());
    }

    if !paragraphs.iter().any(|p| p.text.contains('?')) {
        recs.push("Add question-and-answer sections that mirror what readers search for".to_string());
    }

    if overall_score < w.citability_recommend_definitive_below {
        recs.push("Write more definitive, fact-based statements (\"X is Y\")".to_string());
    }

    deduplicate(recs)
}
