//! Adjective-lexicon model reporting polarity and subjectivity.

use super::{is_negation, tokenize, Polarity, PolarityModel};
use crate::error::CollaboratorFailure;

/// `(word, polarity, subjectivity)`.
const LEXICON: &[(&str, f64, f64)] = &[
    ("adorable", 0.5, 1.0),
    ("amazing", 0.6, 0.9),
    ("anxious", -0.25, 0.75),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("boring", -1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("concerned", -0.2, 0.6),
    ("dangerous", -0.6, 0.9),
    ("delighted", 0.7, 0.7),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("excellent", 1.0, 1.0),
    ("excited", 0.4, 0.75),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.4, 0.5),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("grateful", 0.6, 0.8),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hilarious", 0.5, 0.9),
    ("horrible", -1.0, 1.0),
    ("impressed", 0.6, 0.8),
    ("incredible", 0.9, 0.9),
    ("mixed", 0.0, 0.1),
    ("negative", -0.3, 0.4),
    ("new", 0.14, 0.45),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("pessimistic", -0.6, 0.8),
    ("poor", -0.4, 0.6),
    ("positive", 0.23, 0.55),
    ("promising", 0.5, 0.6),
    ("sad", -0.5, 1.0),
    ("stressful", -0.5, 0.8),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("uncertain", -0.2, 0.6),
    ("unhappy", -0.6, 0.9),
    ("wholesome", 0.5, 0.8),
    ("wonderful", 1.0, 1.0),
    ("worried", -0.4, 0.8),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
];

/// Multipliers applied to the next lexicon word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("really", 1.3),
    ("slightly", 0.5),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("totally", 1.4),
    ("very", 1.3),
];

const NEGATION_MULTIPLIER: f64 = -0.5;

/// Averaging adjective-lexicon model.
///
/// Intensifiers and negations modify the next lexicon word only. The result
/// is the mean over matched words; text with no matched word, including
/// emoji-only or empty text, scores `(0.0, 0.0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternModel;

impl PatternModel {
    fn lookup(token: &str) -> Option<(f64, f64)> {
        LEXICON
            .iter()
            .find(|(word, _, _)| *word == token)
            .map(|&(_, polarity, subjectivity)| (polarity, subjectivity))
    }

    fn intensity(token: &str) -> Option<f64> {
        INTENSIFIERS
            .iter()
            .find(|(word, _)| *word == token)
            .map(|&(_, multiplier)| multiplier)
    }
}

impl PolarityModel for PatternModel {
    fn polarity(&self, text: &str) -> Result<Polarity, CollaboratorFailure> {
        let mut pending = 1.0_f64;
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        for token in tokenize(text) {
            if let Some((polarity, subjectivity)) = Self::lookup(&token) {
                polarities.push((polarity * pending).clamp(-1.0, 1.0));
                subjectivities.push((subjectivity * pending.abs()).clamp(0.0, 1.0));
                pending = 1.0;
            } else if let Some(multiplier) = Self::intensity(&token) {
                pending *= multiplier;
            } else if is_negation(&token) {
                pending *= NEGATION_MULTIPLIER;
            }
        }

        if polarities.is_empty() {
            return Ok(Polarity {
                polarity: 0.0,
                subjectivity: 0.0,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let count = polarities.len() as f64;
        Ok(Polarity {
            polarity: polarities.iter().sum::<f64>() / count,
            subjectivity: subjectivities.iter().sum::<f64>() / count,
        })
    }
}
