//! Keyword-bucket context heuristic and emoji polarity.

use crate::types::{BucketCounts, ContextResult};

pub(crate) const VERY_POSITIVE: &[&str] = &[
    "amazing",
    "fantastic",
    "incredible",
    "wonderful",
    "perfect",
    "excellent",
    "outstanding",
    "brilliant",
    "spectacular",
    "phenomenal",
];

pub(crate) const POSITIVE: &[&str] = &[
    "good", "great", "nice", "happy", "pleased", "satisfied", "glad", "thankful", "grateful",
    "excited", "joy", "love", "like",
];

pub(crate) const NEGATIVE: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "sad",
    "angry",
    "frustrated",
    "disappointed",
    "upset",
    "annoyed",
    "hate",
    "dislike",
];

pub(crate) const VERY_NEGATIVE: &[&str] = &[
    "devastating",
    "catastrophic",
    "tragic",
    "nightmare",
    "disaster",
    "horrific",
    "disgusting",
    "appalling",
    "dreadful",
    "abysmal",
];

pub(crate) const INTENSIFIERS: &[&str] = &[
    "very",
    "extremely",
    "incredibly",
    "absolutely",
    "totally",
    "completely",
    "utterly",
    "really",
    "quite",
    "so",
];

pub(crate) const NEGATIONS: &[&str] = &[
    "not", "never", "no", "nothing", "nobody", "nowhere", "neither", "nor", "n't", "hardly",
    "scarcely", "barely",
];

pub(crate) const POSITIVE_EMOJIS: &[&str] = &[
    "😊", "😄", "😃", "😁", "🙂", "😍", "🥰", "😘", "🤗", "🎉", "🎊", "👍", "❤️", "💕", "🌟", "✨",
];

pub(crate) const NEGATIVE_EMOJIS: &[&str] = &[
    "😞", "😢", "😭", "😰", "😨", "😱", "😡", "😠", "💔", "😔", "😟", "😕", "👎", "😪", "😫", "😩",
];

/// Number of listed words occurring anywhere in `haystack`.
///
/// Substring membership, not tokenized: "so" matches inside "absolutely"
/// and "no" inside "not". Each listed word counts at most once.
fn hits(haystack: &str, words: &[&str]) -> u32 {
    words
        .iter()
        .fold(0, |acc, word| acc + u32::from(haystack.contains(word)))
}

/// Count bucket, intensifier and negation hits in `text`.
#[must_use]
pub fn score_context(text: &str) -> ContextResult {
    let lower = text.to_lowercase();

    ContextResult {
        bucket_counts: BucketCounts {
            very_positive: hits(&lower, VERY_POSITIVE),
            positive: hits(&lower, POSITIVE),
            negative: hits(&lower, NEGATIVE),
            very_negative: hits(&lower, VERY_NEGATIVE),
        },
        intensifier_count: hits(&lower, INTENSIFIERS),
        negation_count: hits(&lower, NEGATIONS),
    }
}

/// Map a [`ContextResult`] onto the 0–100 happiness scale.
///
/// Negation flips and halves the raw score, then an intensifier scales it by
/// 1.5. A text with both gets both, in that order; this is a heuristic and
/// does not model negation scope.
#[must_use]
pub fn context_happiness(context: &ContextResult) -> f64 {
    let buckets = &context.bucket_counts;
    let mut raw = 2.0 * f64::from(buckets.very_positive) + f64::from(buckets.positive)
        - f64::from(buckets.negative)
        - 2.0 * f64::from(buckets.very_negative);

    if context.negation_count > 0 {
        raw *= -0.5;
    }
    if context.intensifier_count > 0 {
        raw *= 1.5;
    }

    (50.0 + raw * 10.0).clamp(0.0, 100.0)
}

/// Positive and negative emoji occurrences, every repeat counted.
#[must_use]
pub fn emoji_counts(text: &str) -> (usize, usize) {
    let count = |set: &[&str]| -> usize { set.iter().map(|e| text.matches(e).count()).sum() };
    (count(POSITIVE_EMOJIS), count(NEGATIVE_EMOJIS))
}

/// Emoji polarity in `[-1, 1]`; `0.0` when no listed emoji occurs.
#[must_use]
pub fn score_emoji(text: &str) -> f64 {
    let (positive, negative) = emoji_counts(text);
    let total = positive + negative;
    if total == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let polarity = (positive as f64 - negative as f64) / total as f64;
    polarity
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
