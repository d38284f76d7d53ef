//! Flesch reading ease and Flesch-Kincaid grade level.
//!
//! ```text
//! grade = 0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59
//! ease  = 206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)
//! ```
//!
//! Higher ease = easier text. Nothing is clamped, so short plain sentences
//! can grade below zero and dense ones can score a negative ease.
//!
//! [`flesch_kincaid`] and [`TextMetrics::compute`] are total: zero words or
//! zero sentences give NaN or infinity rather than an error. Use
//! [`check_readability`] when you want that turned into an
//! [`AnalysisError::Degenerate`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::syllables;
use crate::text;

/// How the syllable total for a text is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SyllableMode {
    /// Run the estimator once over the entire text as a single string.
    ///
    /// Affix rules anchored at the start only see the first word, and
    /// corner cases never fire for multi-word input.
    #[default]
    WholeText,
    /// Sum the estimator over each whitespace-separated token.
    PerWord,
}

impl SyllableMode {
    /// Returns the mode as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WholeText => "whole-text",
            Self::PerWord => "per-word",
        }
    }
}

impl std::fmt::Display for SyllableMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts for a text and the scores derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextMetrics {
    /// Number of words.
    pub words: usize,
    /// Number of sentence boundaries.
    pub sentences: usize,
    /// Estimated syllables.
    pub syllables: usize,
    /// Flesch reading ease. Non-finite for degenerate input.
    pub reading_ease: f64,
    /// Flesch-Kincaid grade level. Non-finite for degenerate input.
    pub grade_level: f64,
}

impl TextMetrics {
    /// Count and score `text`.
    #[tracing::instrument(skip(text), fields(text_len = text.len()))]
    pub fn compute(text: &str, mode: SyllableMode) -> Self {
        let words = text::count_words(text);
        let sentences = text::count_sentences(text);
        let syllables = count_syllables(text, mode);
        let (reading_ease, grade_level) = scores(words, sentences, syllables);

        tracing::debug!(words, sentences, syllables, "text counted");

        Self {
            words,
            sentences,
            syllables,
            reading_ease,
            grade_level,
        }
    }

    /// Whether both scores are finite numbers.
    pub const fn is_finite(&self) -> bool {
        self.reading_ease.is_finite() && self.grade_level.is_finite()
    }
}

/// Flesch reading ease and Flesch-Kincaid grade, estimating syllables over
/// the whole text.
///
/// Returns `(score, grade_level)`.
pub fn flesch_kincaid(text: &str) -> (f64, f64) {
    flesch_kincaid_with(text, SyllableMode::WholeText)
}

/// [`flesch_kincaid`] with an explicit [`SyllableMode`].
pub fn flesch_kincaid_with(text: &str, mode: SyllableMode) -> (f64, f64) {
    let metrics = TextMetrics::compute(text, mode);
    (metrics.reading_ease, metrics.grade_level)
}

/// Syllable total for `text` under `mode`.
pub fn count_syllables(text: &str, mode: SyllableMode) -> usize {
    match mode {
        SyllableMode::WholeText => syllables::syllables_in(text),
        SyllableMode::PerWord => text.split_whitespace().map(syllables::syllables_in).sum(),
    }
}

/// `(reading_ease, grade_level)` from raw counts.
pub fn scores(words: usize, sentences: usize, syllables: usize) -> (f64, f64) {
    let words = words as f64;
    let words_per_sentence = words / sentences as f64;
    let syllables_per_word = syllables as f64 / words;

    let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;
    let ease = 1.015f64.mul_add(-words_per_sentence, 206.835) - 84.6 * syllables_per_word;
    (ease, grade)
}

/// Per-token syllable estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordSyllables {
    /// The token as written.
    pub word: String,
    /// Lowercase letters-only form that was estimated.
    pub normalized: String,
    /// Estimated syllables (0 if nothing survived normalization).
    pub syllables: usize,
}

/// Estimate each whitespace-separated token of `text` separately.
pub fn syllable_breakdown(text: &str) -> Vec<WordSyllables> {
    text.split_whitespace()
        .map(|word| WordSyllables {
            word: word.to_string(),
            normalized: syllables::normalize(word),
            syllables: syllables::syllables_in(word),
        })
        .collect()
}

/// Thresholds and mode for [`check_readability`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadabilityOptions {
    /// How syllables are totalled.
    pub mode: SyllableMode,
    /// Maximum acceptable grade level.
    pub max_grade: Option<f64>,
    /// Minimum acceptable reading ease.
    pub min_ease: Option<f64>,
}

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Counts and scores.
    #[serde(flatten)]
    pub metrics: TextMetrics,
    /// Syllable mode used.
    pub mode: SyllableMode,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Minimum acceptable reading ease (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_ease: Option<f64>,
    /// Whether the grade exceeds the maximum.
    pub over_max: bool,
    /// Whether the reading ease falls below the minimum.
    pub under_min: bool,
}

impl ReadabilityReport {
    /// Whether every configured threshold is met.
    pub const fn passes(&self) -> bool {
        !self.over_max && !self.under_min
    }
}

/// Score `text` and compare it against the thresholds in `options`.
///
/// # Errors
///
/// [`AnalysisError::Degenerate`] when the text has no words or no sentence
/// boundary, since the scores would not be finite.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    options: &ReadabilityOptions,
) -> AnalysisResult<ReadabilityReport> {
    let metrics = TextMetrics::compute(text, options.mode);

    if !metrics.is_finite() {
        tracing::debug!(
            words = metrics.words,
            sentences = metrics.sentences,
            "degenerate input"
        );
        return Err(AnalysisError::Degenerate {
            words: metrics.words,
            sentences: metrics.sentences,
        });
    }

    let over_max = options
        .max_grade
        .is_some_and(|max| metrics.grade_level > max);
    let under_min = options
        .min_ease
        .is_some_and(|min| metrics.reading_ease < min);

    Ok(ReadabilityReport {
        metrics,
        mode: options.mode,
        max_grade: options.max_grade,
        min_ease: options.min_ease,
        over_max,
        under_min,
    })
}

/// Reject inputs larger than `limit` bytes. `None` disables the check.
///
/// # Errors
///
/// [`AnalysisError::InputTooLarge`] when `size` exceeds the limit.
pub const fn check_input_size(size: usize, limit: Option<usize>) -> AnalysisResult<()> {
    match limit {
        Some(limit) if size > limit => Err(AnalysisError::InputTooLarge { size, limit }),
        _ => Ok(()),
    }
}
