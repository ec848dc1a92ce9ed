//! Read-side shapes copied out of the aggregate state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use happydex_core::Source;
use happydex_sentiment::{Label, ScoredText};
use serde::Serialize;
use serde_json::{Map, Value};

/// Display record for a collected post, before scoring fields are merged in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub id: String,
    pub source: Source,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Source-specific fields such as `subreddit` or `instance`.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// A post record merged with its score, as kept in the recent-posts buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: PostRecord,
    pub sentiment_score: f64,
    pub sentiment_label: Label,
    #[serde(flatten)]
    pub scored: ScoredText,
    pub analysis_timestamp: DateTime<Utc>,
}

impl EnrichedPost {
    #[must_use]
    pub fn new(post: PostRecord, scored: ScoredText, analysis_timestamp: DateTime<Utc>) -> Self {
        Self {
            post,
            sentiment_score: scored.happiness_score,
            sentiment_label: scored.label,
            scored,
            analysis_timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    /// Rolling mean, two decimals.
    pub current_happiness: f64,
    pub total_posts_analyzed: u64,
    pub source_breakdown: BTreeMap<Source, u64>,
    /// Most recent scores, oldest first.
    pub happiness_trend: Vec<f64>,
    pub country_sentiment: BTreeMap<&'static str, f64>,
    pub last_updated: DateTime<Utc>,
}

/// One retained entry of a region's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionPoint {
    pub happiness: f64,
    pub timestamp: DateTime<Utc>,
    pub post_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionTimeline {
    pub name: &'static str,
    /// Sum of the synthetic post counts in `timeline`.
    pub total_posts: u64,
    pub timeline: Vec<RegionPoint>,
}

/// Aggregate values captured after one update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub happiness: f64,
    pub posts_count: u64,
    pub source_breakdown: BTreeMap<Source, u64>,
    pub country_sentiment: BTreeMap<&'static str, f64>,
}
