//! Multi-method blend producing a single happiness score.

use std::collections::BTreeMap;

use happydex_core::Source;

use crate::models::{CompoundModel, PatternModel, Polarity, PolarityModel, ValenceModel};
use crate::normalize::normalize;
use crate::scorer::{context_happiness, emoji_counts, score_context, score_emoji};
use crate::types::{Label, Method, ScoredText, TextFeatures};

const COMPOUND_WEIGHT: f64 = 0.4;
const POLARITY_WEIGHT: f64 = 0.3;
const CONTEXT_WEIGHT: f64 = 0.2;
const EMOJI_WEIGHT: f64 = 0.1;

const POSITIVE_THRESHOLD: f64 = 65.0;
const NEGATIVE_THRESHOLD: f64 = 35.0;

/// Happiness substituted when a collaborator fails.
pub const FALLBACK_HAPPINESS: f64 = 50.0;
/// Subjectivity substituted when the polarity collaborator fails.
pub const FALLBACK_SUBJECTIVITY: f64 = 0.5;

/// Blends two polarity collaborators with the context and emoji heuristics.
///
/// Weights are fixed: 0.4 compound, 0.3 polarity, 0.2 context, 0.1 emoji.
pub struct SentimentAnalyzer {
    compound: Box<dyn CompoundModel>,
    polarity: Box<dyn PolarityModel>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::with_models(Box::new(ValenceModel), Box::new(PatternModel))
    }
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer").finish_non_exhaustive()
    }
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn with_models(compound: Box<dyn CompoundModel>, polarity: Box<dyn PolarityModel>) -> Self {
        Self { compound, polarity }
    }

    /// Score one text.
    ///
    /// Empty or absent text short-circuits to a neutral result with zero
    /// confidence. Collaborator failures are logged and replaced with
    /// [`FALLBACK_HAPPINESS`] / [`FALLBACK_SUBJECTIVITY`]; this never fails.
    #[must_use]
    pub fn analyze(&self, text: Option<&str>, source: Source) -> ScoredText {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return ScoredText::neutral_empty();
        };

        let normalized = normalize(text);

        let compound_happiness = match self.compound.compound(&normalized) {
            Ok(compound) => rescale(compound),
            Err(e) => {
                tracing::warn!(
                    source = %source,
                    error = %e,
                    "compound model failed; using neutral"
                );
                FALLBACK_HAPPINESS
            }
        };

        let (polarity_happiness, subjectivity) = match self.polarity.polarity(&normalized) {
            Ok(Polarity {
                polarity,
                subjectivity,
            }) => (rescale(polarity), subjectivity.clamp(0.0, 1.0)),
            Err(e) => {
                tracing::warn!(
                    source = %source,
                    error = %e,
                    "polarity model failed; using neutral"
                );
                (FALLBACK_HAPPINESS, FALLBACK_SUBJECTIVITY)
            }
        };

        let context = score_context(&normalized);
        let context_score = context_happiness(&context);

        // Emoji use the original text; normalization keeps them, but the
        // original is the reference.
        let emoji_score = 50.0 + score_emoji(text) * 50.0;

        let blended = COMPOUND_WEIGHT * compound_happiness
            + POLARITY_WEIGHT * polarity_happiness
            + CONTEXT_WEIGHT * context_score
            + EMOJI_WEIGHT * emoji_score;
        let happiness = blended.clamp(0.0, 100.0);

        let (label, confidence) = classify(happiness);

        let (positive_emoji, negative_emoji) = emoji_counts(text);
        let text_features = TextFeatures {
            length: text.chars().count(),
            word_count: text.split_whitespace().count(),
            has_emojis: positive_emoji + negative_emoji > 0,
            context_words: context.bucket_counts.total(),
        };

        let methods = BTreeMap::from([
            (Method::Compound, round_to(compound_happiness, 1)),
            (Method::Polarity, round_to(polarity_happiness, 1)),
            (Method::Context, round_to(context_score, 1)),
            (Method::Emoji, round_to(emoji_score, 1)),
        ]);

        tracing::debug!(
            source = %source,
            happiness,
            label = %label,
            "scored text"
        );

        ScoredText {
            text: text.to_string(),
            normalized_text: normalized,
            happiness_score: round_to(happiness, 1),
            label,
            confidence: round_to(confidence, 2),
            methods,
            subjectivity: round_to(subjectivity, 2),
            text_features,
        }
    }
}

/// Map a `[-1, 1]` polarity onto `[0, 100]`, clamping out-of-range input.
fn rescale(polarity: f64) -> f64 {
    ((polarity.clamp(-1.0, 1.0) + 1.0) / 2.0) * 100.0
}

/// Label and confidence for a blended score.
pub(crate) fn classify(happiness: f64) -> (Label, f64) {
    if happiness >= POSITIVE_THRESHOLD {
        (Label::Positive, ((happiness - 50.0) / 50.0).min(1.0))
    } else if happiness <= NEGATIVE_THRESHOLD {
        (Label::Negative, ((50.0 - happiness) / 50.0).min(1.0))
    } else {
        (Label::Neutral, 1.0 - (happiness - 50.0).abs() / 50.0)
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollaboratorFailure;

    struct FixedCompound(f64);

    impl CompoundModel for FixedCompound {
        fn compound(&self, _text: &str) -> Result<f64, CollaboratorFailure> {
            Ok(self.0)
        }
    }

    struct FixedPolarity(f64, f64);

    impl PolarityModel for FixedPolarity {
        fn polarity(&self, _text: &str) -> Result<Polarity, CollaboratorFailure> {
            Ok(Polarity {
                polarity: self.0,
                subjectivity: self.1,
            })
        }
    }

    struct Broken;

    impl CompoundModel for Broken {
        fn compound(&self, _text: &str) -> Result<f64, CollaboratorFailure> {
            Err(CollaboratorFailure::Engine {
                model: "broken",
                reason: "engine offline".to_string(),
            })
        }
    }

    impl PolarityModel for Broken {
        fn polarity(&self, _text: &str) -> Result<Polarity, CollaboratorFailure> {
            Err(CollaboratorFailure::Engine {
                model: "broken",
                reason: "engine offline".to_string(),
            })
        }
    }

    fn neutral_models() -> SentimentAnalyzer {
        SentimentAnalyzer::with_models(
            Box::new(FixedCompound(0.0)),
            Box::new(FixedPolarity(0.0, 0.3)),
        )
    }

    #[test]
    fn rescale_maps_range_endpoints() {
        assert_eq!(rescale(-1.0), 0.0);
        assert_eq!(rescale(0.0), 50.0);
        assert_eq!(rescale(1.0), 100.0);
    }

    #[test]
    fn rescale_clamps_out_of_range_input() {
        assert_eq!(rescale(3.0), 100.0);
        assert_eq!(rescale(-7.5), 0.0);
    }

    #[test]
    fn classify_thresholds_are_inclusive() {
        assert_eq!(classify(65.0).0, Label::Positive);
        assert_eq!(classify(35.0).0, Label::Negative);
        assert_eq!(classify(64.9).0, Label::Neutral);
        assert_eq!(classify(35.1).0, Label::Neutral);
    }

    #[test]
    fn classify_confidence_formulas() {
        assert!((classify(80.0).1 - 0.6).abs() < 1e-9);
        assert!((classify(20.0).1 - 0.6).abs() < 1e-9);
        assert!((classify(50.0).1 - 1.0).abs() < 1e-9);
        assert!((classify(60.0).1 - 0.8).abs() < 1e-9);
        assert_eq!(classify(100.0).1, 1.0);
        assert_eq!(classify(0.0).1, 1.0);
    }

    #[test]
    fn round_to_rounds_half_away_from_zero() {
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(99.96, 1), 100.0);
    }

    #[test]
    fn blend_uses_fixed_weights() {
        // compound 1.0 -> 100, polarity -1.0 -> 0, context 50, emoji 50
        let analyzer = SentimentAnalyzer::with_models(
            Box::new(FixedCompound(1.0)),
            Box::new(FixedPolarity(-1.0, 0.0)),
        );
        let scored = analyzer.analyze(Some("plain words"), Source::News);
        // 0.4*100 + 0.3*0 + 0.2*50 + 0.1*50 = 55
        assert_eq!(scored.happiness_score, 55.0);
        assert_eq!(scored.method(Method::Compound), Some(100.0));
        assert_eq!(scored.method(Method::Polarity), Some(0.0));
        assert_eq!(scored.method(Method::Context), Some(50.0));
        assert_eq!(scored.method(Method::Emoji), Some(50.0));
    }

    #[test]
    fn failing_collaborators_fall_back_to_neutral() {
        let analyzer = SentimentAnalyzer::with_models(Box::new(Broken), Box::new(Broken));
        let scored = analyzer.analyze(Some("plain words"), Source::Forums);
        assert_eq!(scored.method(Method::Compound), Some(FALLBACK_HAPPINESS));
        assert_eq!(scored.method(Method::Polarity), Some(FALLBACK_HAPPINESS));
        assert_eq!(scored.subjectivity, FALLBACK_SUBJECTIVITY);
        assert_eq!(scored.happiness_score, 50.0);
        assert_eq!(scored.label, Label::Neutral);
    }

    #[test]
    fn subjectivity_comes_from_polarity_model() {
        let scored = neutral_models().analyze(Some("plain words"), Source::Reddit);
        assert_eq!(scored.subjectivity, 0.3);
    }

    #[test]
    fn emoji_is_scored_on_original_text() {
        let scored = neutral_models().analyze(Some("😊😊👍"), Source::Twitter);
        assert_eq!(scored.method(Method::Emoji), Some(100.0));
        // 0.4*50 + 0.3*50 + 0.2*50 + 0.1*100 = 55
        assert_eq!(scored.happiness_score, 55.0);
        assert!(scored.text_features.has_emojis);
    }

    #[test]
    fn context_uses_normalized_text() {
        // "@happyface" is a mention and must not count as "happy".
        let scored = neutral_models().analyze(Some("@happyface hello"), Source::Mastodon);
        assert_eq!(scored.method(Method::Context), Some(50.0));
        assert_eq!(scored.normalized_text, "hello");
    }

    #[test]
    fn features_describe_original_text() {
        let scored = neutral_models().analyze(Some("good day https://x.io 😊"), Source::Youtube);
        assert_eq!(scored.text_features.length, 23);
        assert_eq!(scored.text_features.word_count, 4);
        assert!(scored.text_features.has_emojis);
        assert_eq!(scored.text_features.context_words, 1);
        assert_eq!(scored.text, "good day https://x.io 😊");
    }

    #[test]
    fn empty_and_absent_text_are_identical() {
        let analyzer = SentimentAnalyzer::default();
        let empty = analyzer.analyze(Some(""), Source::News);
        let absent = analyzer.analyze(None, Source::News);
        assert_eq!(empty, absent);
        assert_eq!(empty, ScoredText::neutral_empty());
        assert_eq!(analyzer.analyze(None, Source::News), absent);
    }

    #[test]
    fn empty_text_skips_collaborators() {
        let analyzer = SentimentAnalyzer::with_models(Box::new(Broken), Box::new(Broken));
        let scored = analyzer.analyze(Some(""), Source::News);
        assert_eq!(scored.happiness_score, 50.0);
        assert_eq!(scored.confidence, 0.0);
        assert!(scored.methods.is_empty());
    }
}
