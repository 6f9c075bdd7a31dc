//! The scoring table.
//!
//! Every point value, threshold and band boundary the analyzers use lives
//! here, so scoring rules can be audited and tested apart from the text
//! parsing. A JSON file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    // Keyword placement
    pub keyword_title_points: i32,
    pub keyword_slug_points: i32,
    pub keyword_meta_description_points: i32,
    pub keyword_first_paragraph_points: i32,
    pub keyword_headings_points: i32,
    pub keyword_image_alt_points: i32,
    pub density_natural_min: f64,
    pub density_natural_max: f64,
    pub density_natural_bonus: i32,
    pub density_stuffing_penalty: i32,
    pub keyword_good_min: i32,
    pub keyword_ok_min: i32,

    // Readability
    pub readability_easy_min: f64,
    pub readability_standard_min: f64,
    pub readability_difficult_min: f64,

    // Citability
    pub citability_baseline: i32,
    pub citability_short_max_words: usize,
    pub citability_short_penalty: i32,
    pub citability_optimal_min_words: usize,
    pub citability_brief_penalty: i32,
    pub citability_optimal_max_words: usize,
    pub citability_long_max_words: usize,
    pub citability_long_penalty: i32,
    pub citability_too_long_penalty: i32,
    pub citability_number_bonus: i32,
    pub citability_no_number_penalty: i32,
    pub citability_definitive_bonus: i32,
    pub citability_question_bonus: i32,
    pub citability_clarifier_bonus: i32,
    pub citability_clarifier_hint_min_words: usize,
    pub citability_vague_max_free: usize,
    pub citability_vague_penalty_each: i32,
    pub citability_quotable_min: i32,
    pub citability_recommend_expand_words: usize,
    pub citability_recommend_break_words: usize,
    pub citability_recommend_data_below: i32,
    pub citability_recommend_definitive_below: i32,

    // Checklist
    pub checklist_title_min_chars: usize,
    pub checklist_title_max_chars: usize,
    pub checklist_title_points: u32,
    pub checklist_title_partial: u32,
    pub checklist_meta_min_chars: usize,
    pub checklist_meta_max_chars: usize,
    pub checklist_meta_points: u32,
    pub checklist_meta_partial: u32,
    pub checklist_slug_max_chars: usize,
    pub checklist_slug_points: u32,
    pub checklist_slug_partial: u32,
    pub checklist_keywords_min: usize,
    pub checklist_keywords_max: usize,
    pub checklist_keywords_points: u32,
    pub checklist_keywords_partial: u32,
    pub checklist_image_points: u32,
    pub checklist_content_full_words: usize,
    pub checklist_content_partial_words: usize,
    pub checklist_content_points: u32,
    pub checklist_content_partial: u32,
    pub checklist_focus_keyword_points: u32,
    pub checklist_internal_min: usize,
    pub checklist_internal_max: usize,
    pub checklist_internal_points: u32,
    pub checklist_internal_partial: u32,
    pub checklist_external_min: usize,
    pub checklist_external_max: usize,
    pub checklist_external_points: u32,
    pub checklist_external_partial: u32,
    pub checklist_h2_full_min: usize,
    pub checklist_headings_points: u32,
    pub checklist_headings_partial: u32,
    pub checklist_readability_good: u32,
    pub checklist_readability_ok: u32,
}

static DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    keyword_title_points: 20,
    keyword_slug_points: 15,
    keyword_meta_description_points: 15,
    keyword_first_paragraph_points: 20,
    keyword_headings_points: 15,
    keyword_image_alt_points: 10,
    density_natural_min: 0.5,
    density_natural_max: 2.5,
    density_natural_bonus: 5,
    density_stuffing_penalty: -10,
    keyword_good_min: 70,
    keyword_ok_min: 40,

    readability_easy_min: 80.0,
    readability_standard_min: 60.0,
    readability_difficult_min: 40.0,

    citability_baseline: 100,
    citability_short_max_words: 50,
    citability_short_penalty: -30,
    citability_optimal_min_words: 134,
    citability_brief_penalty: -15,
    citability_optimal_max_words: 167,
    citability_long_max_words: 250,
    citability_long_penalty: -10,
    citability_too_long_penalty: -25,
    citability_number_bonus: 10,
    citability_no_number_penalty: -10,
    citability_definitive_bonus: 5,
    citability_question_bonus: 15,
    citability_clarifier_bonus: 5,
    citability_clarifier_hint_min_words: 50,
    citability_vague_max_free: 2,
    citability_vague_penalty_each: -5,
    citability_quotable_min: 70,
    citability_recommend_expand_words: 100,
    citability_recommend_break_words: 200,
    citability_recommend_data_below: 60,
    citability_recommend_definitive_below: 70,

    checklist_title_min_chars: 30,
    checklist_title_max_chars: 60,
    checklist_title_points: 10,
    checklist_title_partial: 5,
    checklist_meta_min_chars: 120,
    checklist_meta_max_chars: 160,
    checklist_meta_points: 10,
    checklist_meta_partial: 5,
    checklist_slug_max_chars: 50,
    checklist_slug_points: 5,
    checklist_slug_partial: 3,
    checklist_keywords_min: 3,
    checklist_keywords_max: 8,
    checklist_keywords_points: 10,
    checklist_keywords_partial: 5,
    checklist_image_points: 5,
    checklist_content_full_words: 600,
    checklist_content_partial_words: 300,
    checklist_content_points: 10,
    checklist_content_partial: 5,
    checklist_focus_keyword_points: 20,
    checklist_internal_min: 2,
    checklist_internal_max: 5,
    checklist_internal_points: 10,
    checklist_internal_partial: 5,
    checklist_external_min: 1,
    checklist_external_max: 3,
    checklist_external_points: 5,
    checklist_external_partial: 3,
    checklist_h2_full_min: 2,
    checklist_headings_points: 10,
    checklist_headings_partial: 5,
    checklist_readability_good: 5,
    checklist_readability_ok: 3,
};

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS.clone()
    }
}

impl ScoringWeights {
    /// The built-in table, without cloning.
    pub fn defaults() -> &'static ScoringWeights {
        &DEFAULT_WEIGHTS
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let weights: ScoringWeights = serde_json::from_str(json)?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Sum of the checklist's per-criterion maxima, saturating at
    /// `u32::MAX`.
    pub fn checklist_max_points(&self) -> u32 {
        self.checklist_full_points()
            .into_iter()
            .fold(0u32, u32::saturating_add)
    }

    fn checklist_full_points(&self) -> [u32; 11] {
        [
            self.checklist_title_points,
            self.checklist_meta_points,
            self.checklist_slug_points,
            self.checklist_keywords_points,
            self.checklist_image_points,
            self.checklist_content_points,
            self.checklist_focus_keyword_points,
            self.checklist_internal_points,
            self.checklist_external_points,
            self.checklist_headings_points,
            self.checklist_readability_good,
        ]
    }

    /// Reject tables whose ranges are inverted, whose bands cannot be
    /// ordered, or whose point values fall outside `[-100, 100]`.
    pub fn validate(&self) -> Result<()> {
        let signed: [(&str, i32); 22] = [
            ("keyword_title_points", self.keyword_title_points),
            ("keyword_slug_points", self.keyword_slug_points),
            (
                "keyword_meta_description_points",
                self.keyword_meta_description_points,
            ),
            (
                "keyword_first_paragraph_points",
                self.keyword_first_paragraph_points,
            ),
            ("keyword_headings_points", self.keyword_headings_points),
            ("keyword_image_alt_points", self.keyword_image_alt_points),
            ("density_natural_bonus", self.density_natural_bonus),
            ("density_stuffing_penalty", self.density_stuffing_penalty),
            ("keyword_good_min", self.keyword_good_min),
            ("keyword_ok_min", self.keyword_ok_min),
            ("citability_baseline", self.citability_baseline),
            ("citability_short_penalty", self.citability_short_penalty),
            ("citability_brief_penalty", self.citability_brief_penalty),
            ("citability_long_penalty", self.citability_long_penalty),
            ("citability_too_long_penalty", self.citability_too_long_penalty),
            ("citability_number_bonus", self.citability_number_bonus),
            ("citability_no_number_penalty", self.citability_no_number_penalty),
            ("citability_definitive_bonus", self.citability_definitive_bonus),
            ("citability_question_bonus", self.citability_question_bonus),
            ("citability_clarifier_bonus", self.citability_clarifier_bonus),
            ("citability_vague_penalty_each", self.citability_vague_penalty_each),
            ("citability_quotable_min", self.citability_quotable_min),
        ];
        for (name, value) in signed {
            if !(-100..=100).contains(&value) {
                return Err(ScoreError::InvalidWeights(format!(
                    "{name}: {value} is outside [-100, 100]"
                )));
            }
        }

        let partials = [
            self.checklist_title_partial,
            self.checklist_meta_partial,
            self.checklist_slug_partial,
            self.checklist_keywords_partial,
            self.checklist_content_partial,
            self.checklist_internal_partial,
            self.checklist_external_partial,
            self.checklist_headings_partial,
            self.checklist_readability_ok,
        ];
        if let Some(points) = self
            .checklist_full_points()
            .into_iter()
            .chain(partials)
            .find(|points| *points > 100)
        {
            return Err(ScoreError::InvalidWeights(format!(
                "checklist criterion worth {points} points exceeds 100"
            )));
        }

        let full_and_partial = [
            ("title", self.checklist_title_points, self.checklist_title_partial),
            ("meta description", self.checklist_meta_points, self.checklist_meta_partial),
            ("slug", self.checklist_slug_points, self.checklist_slug_partial),
            ("keywords", self.checklist_keywords_points, self.checklist_keywords_partial),
            ("content", self.checklist_content_points, self.checklist_content_partial),
            ("internal links", self.checklist_internal_points, self.checklist_internal_partial),
            ("external links", self.checklist_external_points, self.checklist_external_partial),
            ("headings", self.checklist_headings_points, self.checklist_headings_partial),
            ("readability", self.checklist_readability_good, self.checklist_readability_ok),
        ];
        for (name, full, partial) in full_and_partial {
            if partial > full {
                return Err(ScoreError::InvalidWeights(format!(
                    "checklist {name}: partial {partial} exceeds full {full}"
                )));
            }
        }

        let ranges: [(&str, usize, usize); 6] = [
            (
                "checklist title",
                self.checklist_title_min_chars,
                self.checklist_title_max_chars,
            ),
            (
                "checklist meta description",
                self.checklist_meta_min_chars,
                self.checklist_meta_max_chars,
            ),
            (
                "checklist keywords",
                self.checklist_keywords_min,
                self.checklist_keywords_max,
            ),
            (
                "checklist internal links",
                self.checklist_internal_min,
                self.checklist_internal_max,
            ),
            (
                "checklist external links",
                self.checklist_external_min,
                self.checklist_external_max,
            ),
            (
                "citability optimal band",
                self.citability_optimal_min_words,
                self.citability_optimal_max_words,
            ),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(ScoreError::InvalidWeights(format!(
                    "{name}: min {min} exceeds max {max}"
                )));
            }
        }

        if !(self.density_natural_min.is_finite() && self.density_natural_max.is_finite())
            || self.density_natural_min > self.density_natural_max
        {
            return Err(ScoreError::InvalidWeights(format!(
                "density band [{}, {}] is not a finite ordered range",
                self.density_natural_min, self.density_natural_max
            )));
        }

        if self.citability_short_max_words > self.citability_optimal_min_words
            || self.citability_optimal_max_words > self.citability_long_max_words
        {
            return Err(ScoreError::InvalidWeights(
                "citability word-count bands overlap".to_string(),
            ));
        }

        if !(self.readability_easy_min >= self.readability_standard_min
            && self.readability_standard_min >= self.readability_difficult_min)
        {
            return Err(ScoreError::InvalidWeights(
                "readability grade thresholds must be descending".to_string(),
            ));
        }

        if self.keyword_ok_min > self.keyword_good_min {
            return Err(ScoreError::InvalidWeights(format!(
                "keyword ok threshold {} exceeds good threshold {}",
                self.keyword_ok_min, self.keyword_good_min
            )));
        }

        if self.checklist_content_partial_words > self.checklist_content_full_words {
            return Err(ScoreError::InvalidWeights(
                "checklist content partial threshold exceeds full threshold".to_string(),
            ));
        }

        if self.checklist_max_points() == 0 {
            return Err(ScoreError::InvalidWeights(
                "checklist has no attainable points".to_string(),
            ));
        }
        Ok(())
    }
}
