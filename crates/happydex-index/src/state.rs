//! The aggregate owned by the index and its single update sequence.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use happydex_core::{AppConfig, Source};
use happydex_sentiment::ScoredText;

use crate::bounded::BoundedQueue;
use crate::region::{synthesize, Jitter, REGIONS};
use crate::snapshot::{
    EnrichedPost, PostRecord, RegionPoint, RegionTimeline, StatusSnapshot, TimeSeriesPoint,
};

/// Happiness reported before anything has been analyzed.
pub const INITIAL_HAPPINESS: f64 = 50.0;

/// Capacities of the bounded buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexLimits {
    pub rolling_window: usize,
    pub recent_posts: usize,
    pub time_series: usize,
    pub region_history: usize,
}

impl Default for IndexLimits {
    fn default() -> Self {
        Self {
            rolling_window: 1000,
            recent_posts: 50,
            time_series: 1440,
            region_history: 100,
        }
    }
}

impl From<&AppConfig> for IndexLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            rolling_window: config.rolling_window,
            recent_posts: config.recent_posts_cap,
            time_series: config.time_series_cap,
            region_history: config.region_history_cap,
        }
    }
}

/// All aggregate values. Mutated only through [`AggregateState::update`].
#[derive(Debug, Clone)]
pub struct AggregateState {
    limits: IndexLimits,
    rolling_scores: BoundedQueue<f64>,
    current_happiness: f64,
    source_counts: BTreeMap<Source, u64>,
    total_analyzed: u64,
    recent_posts: BoundedQueue<EnrichedPost>,
    region_snapshot: BTreeMap<&'static str, f64>,
    region_history: BTreeMap<&'static str, BoundedQueue<RegionPoint>>,
    time_series: BoundedQueue<TimeSeriesPoint>,
    last_updated: Option<DateTime<Utc>>,
}

impl AggregateState {
    #[must_use]
    pub fn new(limits: IndexLimits) -> Self {
        Self {
            limits,
            rolling_scores: BoundedQueue::new(limits.rolling_window),
            current_happiness: INITIAL_HAPPINESS,
            source_counts: Source::ALL.iter().map(|&s| (s, 0)).collect(),
            total_analyzed: 0,
            recent_posts: BoundedQueue::new(limits.recent_posts),
            region_snapshot: BTreeMap::new(),
            region_history: BTreeMap::new(),
            time_series: BoundedQueue::new(limits.time_series),
            last_updated: None,
        }
    }

    /// Fold one scored text into the aggregate.
    ///
    /// Appends the score, bumps the source and total counters, stores the
    /// enriched post when one is given, recomputes the rolling mean,
    /// regenerates every region from it and appends one time-series point.
    pub fn update(
        &mut self,
        scored: ScoredText,
        source: Source,
        post: Option<PostRecord>,
        jitter: &mut dyn Jitter,
        now: DateTime<Utc>,
    ) {
        self.rolling_scores.push_back(scored.happiness_score);
        *self.source_counts.entry(source).or_insert(0) += 1;
        self.total_analyzed += 1;

        if let Some(post) = post {
            self.recent_posts
                .push_front(EnrichedPost::new(post, scored, now));
        }

        self.current_happiness = mean(&self.rolling_scores);

        let readings = synthesize(self.current_happiness, jitter);
        self.region_snapshot = readings.iter().map(|r| (r.name, r.happiness)).collect();
        let cap = self.limits.region_history;
        for reading in readings {
            self.region_history
                .entry(reading.name)
                .or_insert_with(|| BoundedQueue::new(cap))
                .push_back(RegionPoint {
                    happiness: reading.happiness,
                    timestamp: now,
                    post_count: reading.post_count,
                });
        }

        self.time_series.push_back(TimeSeriesPoint {
            timestamp: now,
            happiness: self.current_happiness,
            posts_count: self.total_analyzed,
            source_breakdown: self.source_counts.clone(),
            country_sentiment: self.region_snapshot.clone(),
        });
        self.last_updated = Some(now);

        tracing::debug!(
            source = %source,
            current_happiness = self.current_happiness,
            total_analyzed = self.total_analyzed,
            "index updated"
        );
    }

    #[must_use]
    pub fn limits(&self) -> IndexLimits {
        self.limits
    }

    #[must_use]
    pub fn current_happiness(&self) -> f64 {
        self.current_happiness
    }

    #[must_use]
    pub fn total_analyzed(&self) -> u64 {
        self.total_analyzed
    }

    #[must_use]
    pub fn source_counts(&self) -> &BTreeMap<Source, u64> {
        &self.source_counts
    }

    #[must_use]
    pub fn rolling_scores(&self) -> &BoundedQueue<f64> {
        &self.rolling_scores
    }

    #[must_use]
    pub fn region_snapshot(&self) -> &BTreeMap<&'static str, f64> {
        &self.region_snapshot
    }

    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Copy of the headline values with the last `trend_len` scores.
    ///
    /// `last_updated` falls back to `now` when nothing has been recorded.
    #[must_use]
    pub fn status(&self, trend_len: usize, now: DateTime<Utc>) -> StatusSnapshot {
        StatusSnapshot {
            current_happiness: (self.current_happiness * 100.0).round() / 100.0,
            total_posts_analyzed: self.total_analyzed,
            source_breakdown: self.source_counts.clone(),
            happiness_trend: self.rolling_scores.tail(trend_len),
            country_sentiment: self.region_snapshot.clone(),
            last_updated: self.last_updated.unwrap_or(now),
        }
    }

    /// Up to `limit` enriched posts, most recent first.
    #[must_use]
    pub fn recent_posts(&self, limit: usize) -> Vec<EnrichedPost> {
        self.recent_posts.head(limit)
    }

    /// Per-region history in the fixed region order.
    ///
    /// Empty until the first update.
    #[must_use]
    pub fn region_timeline(&self) -> Vec<RegionTimeline> {
        REGIONS
            .iter()
            .filter_map(|&(name, _)| {
                let history = self.region_history.get(name)?;
                Some(RegionTimeline {
                    name,
                    total_posts: history.iter().map(|p| u64::from(p.post_count)).sum(),
                    timeline: history.iter().copied().collect(),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn time_series(&self) -> Vec<TimeSeriesPoint> {
        self.time_series.iter().cloned().collect()
    }
}

impl Default for AggregateState {
    fn default() -> Self {
        Self::new(IndexLimits::default())
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(scores: &BoundedQueue<f64>) -> f64 {
    if scores.is_empty() {
        return INITIAL_HAPPINESS;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
