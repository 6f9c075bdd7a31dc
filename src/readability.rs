//! Flesch Reading Ease.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::normalize;
use crate::weights::ScoringWeights;
use crate::Status;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z]").unwrap());

static SILENT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());

static LEADING_Y_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^y").unwrap());

static VOWEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadabilityGrade {
    Easy,
    Standard,
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl ReadabilityGrade {
    pub fn label(&self) -> &'static str {
        match self {
            ReadabilityGrade::Easy => "Easy",
            ReadabilityGrade::Standard => "Standard",
            ReadabilityGrade::Difficult => "Difficult",
            ReadabilityGrade::VeryDifficult => "Very Difficult",
            ReadabilityGrade::NotAvailable => "N/A",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    pub flesch_score: i32,
    pub grade: ReadabilityGrade,
    pub status: Status,
}

impl ReadabilityResult {
    const NOT_AVAILABLE: ReadabilityResult = ReadabilityResult {
        flesch_score: 0,
        grade: ReadabilityGrade::NotAvailable,
        status: Status::Poor,
    };
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

pub(crate) fn score(markup: &str, w: &ScoringWeights) -> ReadabilityResult {
    let text = normalize::strip_tags(markup);
    if text.is_empty() {
        return ReadabilityResult::NOT_AVAILABLE;
    }

    let words = normalize::words(&text);
    let sentence_count = SENTENCE_SPLIT_RE
        .split(&text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let word_count = words.len().max(1);
    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();

    let avg_sentence_length = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllables as f64 / word_count as f64;
    let raw = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
    let flesch = raw.clamp(0.0, 100.0).round();

    let (grade, status) = if flesch >= w.readability_easy_min {
        (ReadabilityGrade::Easy, Status::Good)
    } else if flesch >= w.readability_standard_min {
        (ReadabilityGrade::Standard, Status::Good)
    } else if flesch >= w.readability_difficult_min {
        (ReadabilityGrade::Difficult, Status::Ok)
    } else {
        (ReadabilityGrade::VeryDifficult, Status::Poor)
    };

    debug!(
        sentences = sentence_count,
        words = word_count,
        syllables,
        flesch,
        "readability scored"
    );

    ReadabilityResult {
        flesch_score: flesch as i32,
        grade,
        status,
    }
}

/// Vowel-group syllable estimate. Never returns zero.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let word = NON_LETTER_RE.replace_all(&lower, "");
    if word.len() <= 3 {
        return 1;
    }
    let word = SILENT_SUFFIX_RE.replace(&word, "");
    let word = LEADING_Y_RE.replace(&word, "");
    VOWEL_GROUP_RE.find_iter(&word).count().max(1)
}
