//! Rule-based valence model producing a normalized compound score.

use super::{is_negation, tokenize, CompoundModel};
use crate::error::CollaboratorFailure;

/// Word valences on a `[-4, 4]` scale.
const VALENCE: &[(&str, f64)] = &[
    // Positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("breakthrough", 1.8),
    ("brilliant", 2.8),
    ("celebrate", 2.7),
    ("celebration", 2.6),
    ("comfort", 1.5),
    ("enjoy", 2.2),
    ("excellent", 3.2),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fantastic", 2.6),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("helped", 1.7),
    ("hilarious", 1.7),
    ("hope", 1.9),
    ("impressed", 2.1),
    ("incredible", 2.6),
    ("joy", 2.8),
    ("kind", 2.4),
    ("like", 1.5),
    ("love", 3.2),
    ("loving", 2.9),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("promising", 1.7),
    ("recommend", 1.5),
    ("relief", 1.5),
    ("restored", 1.3),
    ("success", 2.7),
    ("support", 1.7),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("win", 2.8),
    ("wholesome", 1.8),
    ("wonderful", 2.7),
    // Negative
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("anxious", -1.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("concerned", -1.3),
    ("crisis", -3.1),
    ("dangerous", -2.1),
    ("depressed", -2.3),
    ("devastating", -3.3),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("dreadful", -2.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("frustrated", -2.4),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("nightmare", -2.7),
    ("overwhelmed", -1.5),
    ("pessimistic", -1.5),
    ("problem", -1.7),
    ("sad", -2.1),
    ("stress", -1.8),
    ("stressful", -2.0),
    ("struggle", -1.5),
    ("struggling", -1.6),
    ("tension", -1.3),
    ("terrible", -2.5),
    ("tragic", -3.1),
    ("uncertainty", -1.0),
    ("upset", -1.6),
    ("worried", -1.2),
    ("worst", -3.1),
];

/// Words that push the next sentiment word further from zero.
const BOOSTERS: &[&str] = &[
    "absolutely",
    "completely",
    "extremely",
    "highly",
    "incredibly",
    "really",
    "so",
    "totally",
    "utterly",
    "very",
];

/// Words that pull the next sentiment word toward zero.
const DAMPENERS: &[&str] = &["barely", "hardly", "kinda", "slightly", "somewhat"];

const BOOST_STEP: f64 = 0.293;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;
/// How many preceding tokens can modify a sentiment word.
const WINDOW: usize = 3;

/// Lexicon valence model.
///
/// Sums per-word valences adjusted for boosters, dampeners and negation in a
/// three-token look-back window, adds exclamation emphasis, and maps the sum
/// into `[-1, 1]` with `s / sqrt(s² + 15)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValenceModel;

impl ValenceModel {
    fn lookup(token: &str) -> Option<f64> {
        VALENCE
            .iter()
            .find(|(word, _)| *word == token)
            .map(|&(_, valence)| valence)
    }

    fn word_valence(tokens: &[String], index: usize, base: f64) -> f64 {
        let mut valence = base;
        let mut negated = false;

        for distance in 1..=WINDOW.min(index) {
            let previous = tokens[index - distance].as_str();
            // Modifiers further back contribute slightly less.
            #[allow(clippy::cast_precision_loss)]
            let decay = 1.0 - 0.05 * (distance - 1) as f64;

            if BOOSTERS.contains(&previous) {
                valence += base.signum() * BOOST_STEP * decay;
            } else if DAMPENERS.contains(&previous) {
                valence -= base.signum() * BOOST_STEP * decay;
            } else if is_negation(previous) {
                negated = true;
            }
        }

        if negated {
            valence *= NEGATION_SCALAR;
        }
        valence
    }

    fn normalize(sum: f64) -> f64 {
        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl CompoundModel for ValenceModel {
    fn compound(&self, text: &str) -> Result<f64, CollaboratorFailure> {
        let tokens = tokenize(text);

        let mut sum: f64 = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                Self::lookup(token).map(|base| Self::word_valence(&tokens, i, base))
            })
            .sum();

        if sum != 0.0 {
            let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
            #[allow(clippy::cast_precision_loss)]
            let emphasis = exclamations as f64 * EXCLAMATION_STEP;
            sum += sum.signum() * emphasis;
        }

        Ok(Self::normalize(sum))
    }
}
