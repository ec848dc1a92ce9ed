use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Sentiment class derived from the blended happiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Label::Positive => "positive",
            Label::Neutral => "neutral",
            Label::Negative => "negative",
        })
    }
}

/// Scoring method contributing to the blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Compound-score collaborator.
    Compound,
    /// Polarity/subjectivity collaborator.
    Polarity,
    Context,
    Emoji,
}

/// Simple counts describing the input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextFeatures {
    /// Length in characters, not bytes.
    pub length: usize,
    pub word_count: usize,
    pub has_emojis: bool,
    pub context_words: u32,
}

/// Result of analyzing one text. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredText {
    #[serde(skip)]
    pub text: String,
    #[serde(skip)]
    pub normalized_text: String,
    /// Blended happiness in `[0, 100]`, one decimal.
    pub happiness_score: f64,
    pub label: Label,
    /// `[0, 1]`, two decimals.
    pub confidence: f64,
    /// Per-method happiness in `[0, 100]`; empty for empty input.
    pub methods: BTreeMap<Method, f64>,
    pub subjectivity: f64,
    pub text_features: TextFeatures,
}

impl ScoredText {
    /// The fixed result for empty or absent input.
    #[must_use]
    pub fn neutral_empty() -> Self {
        Self {
            text: String::new(),
            normalized_text: String::new(),
            happiness_score: 50.0,
            label: Label::Neutral,
            confidence: 0.0,
            methods: BTreeMap::new(),
            subjectivity: 0.0,
            text_features: TextFeatures::default(),
        }
    }

    /// Sub-score for one method, if it ran.
    #[must_use]
    pub fn method(&self, method: Method) -> Option<f64> {
        self.methods.get(&method).copied()
    }
}

/// Keyword bucket hits for the context heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub very_positive: u32,
    pub positive: u32,
    pub negative: u32,
    pub very_negative: u32,
}

impl BucketCounts {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.very_positive + self.positive + self.negative + self.very_negative
    }
}

/// Output of [`crate::scorer::score_context`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextResult {
    pub bucket_counts: BucketCounts,
    pub intensifier_count: u32,
    pub negation_count: u32,
}
