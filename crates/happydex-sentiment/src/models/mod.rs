//! Polarity collaborators blended by the analyzer.
//!
//! The analyzer treats both models as black boxes behind a trait. The
//! built-in implementations are small lexicon models; anything that can
//! produce a compound score or a polarity/subjectivity pair can be swapped in.

mod pattern;
mod valence;

pub use pattern::PatternModel;
pub use valence::ValenceModel;

use crate::error::CollaboratorFailure;

/// Polarity and subjectivity reported by a [`PolarityModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarity {
    /// `[-1, 1]`, negative to positive.
    pub polarity: f64,
    /// `[0, 1]`, objective to subjective.
    pub subjectivity: f64,
}

/// Produces a single compound sentiment score in `[-1, 1]`.
pub trait CompoundModel: Send + Sync {
    /// # Errors
    ///
    /// Returns [`CollaboratorFailure`] if the model cannot score `text`.
    fn compound(&self, text: &str) -> Result<f64, CollaboratorFailure>;
}

/// Produces a polarity in `[-1, 1]` and a subjectivity in `[0, 1]`.
pub trait PolarityModel: Send + Sync {
    /// # Errors
    ///
    /// Returns [`CollaboratorFailure`] if the model cannot score `text`.
    fn polarity(&self, text: &str) -> Result<Polarity, CollaboratorFailure>;
}

/// Lowercased word tokens with surrounding punctuation removed.
///
/// Apostrophes are kept so contractions like "don't" survive.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

pub(crate) fn is_negation(token: &str) -> bool {
    matches!(
        token,
        "not" | "no" | "never" | "nothing" | "nobody" | "none" | "neither" | "nor" | "cannot"
    ) || token.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_strips_punctuation_and_lowercases() {
        assert_eq!(tokenize("Great, day!!"), vec!["great", "day"]);
    }

    #[test]
    fn tokenize_keeps_contractions() {
        assert_eq!(tokenize("Don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn tokenize_drops_symbol_only_tokens() {
        assert!(tokenize("😊 -- !!").is_empty());
    }

    #[test]
    fn negation_covers_contractions() {
        assert!(is_negation("isn't"));
        assert!(is_negation("never"));
        assert!(!is_negation("notable"));
    }
}
