//! Shared handle around the aggregate state.

use std::sync::Arc;

use chrono::Utc;
use happydex_core::Source;
use happydex_sentiment::ScoredText;
use tokio::sync::{watch, RwLock};

use crate::error::IndexError;
use crate::region::{Jitter, RngJitter};
use crate::snapshot::{EnrichedPost, PostRecord, RegionTimeline, StatusSnapshot, TimeSeriesPoint};
use crate::state::{AggregateState, IndexLimits};

/// Number of scores reported in [`StatusSnapshot::happiness_trend`].
pub const TREND_LEN: usize = 20;

struct Guarded {
    state: AggregateState,
    jitter: Box<dyn Jitter>,
}

struct Inner {
    guarded: RwLock<Guarded>,
    revision: watch::Sender<u64>,
}

/// Cloneable handle to the single aggregate.
///
/// Writers hold the write lock for the whole update sequence, so readers never
/// see a mean that disagrees with the counters. Readers hold the read lock only
/// while copying.
#[derive(Clone)]
pub struct HappinessIndex {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for HappinessIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HappinessIndex")
            .field("revision", &*self.inner.revision.borrow())
            .finish_non_exhaustive()
    }
}

impl Default for HappinessIndex {
    fn default() -> Self {
        Self::new(IndexLimits::default())
    }
}

impl HappinessIndex {
    /// Index with OS-seeded region jitter.
    #[must_use]
    pub fn new(limits: IndexLimits) -> Self {
        Self::with_jitter(limits, Box::new(RngJitter::default()))
    }

    #[must_use]
    pub fn with_jitter(limits: IndexLimits, jitter: Box<dyn Jitter>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                guarded: RwLock::new(Guarded {
                    state: AggregateState::new(limits),
                    jitter,
                }),
                revision,
            }),
        }
    }

    /// Apply one scored text and return the new revision.
    pub async fn record(
        &self,
        scored: ScoredText,
        source: Source,
        post: Option<PostRecord>,
    ) -> u64 {
        {
            let mut guarded = self.inner.guarded.write().await;
            let Guarded { state, jitter } = &mut *guarded;
            state.update(scored, source, post, jitter.as_mut(), Utc::now());
        }

        let mut revision = 0;
        self.inner.revision.send_modify(|r| {
            *r += 1;
            revision = *r;
        });
        revision
    }

    /// [`HappinessIndex::record`] for a source given by name.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidSource`] without touching the state when
    /// `source` is not one of the known sources.
    pub async fn record_named(
        &self,
        scored: ScoredText,
        source: &str,
        post: Option<PostRecord>,
    ) -> Result<u64, IndexError> {
        let parsed: Source = source.parse().map_err(|_| {
            tracing::warn!(source, "rejected update for unknown source");
            IndexError::InvalidSource(source.to_string())
        })?;
        Ok(self.record(scored, parsed, post).await)
    }

    /// Run `f` against the state under the read lock.
    ///
    /// Use for composite reads that must come from the same revision.
    pub async fn read<R>(&self, f: impl FnOnce(&AggregateState) -> R) -> R {
        let guarded = self.inner.guarded.read().await;
        f(&guarded.state)
    }

    pub async fn status(&self) -> StatusSnapshot {
        self.read(|s| s.status(TREND_LEN, Utc::now())).await
    }

    pub async fn recent_posts(&self, limit: usize) -> Vec<EnrichedPost> {
        self.read(|s| s.recent_posts(limit)).await
    }

    pub async fn region_timeline(&self) -> Vec<RegionTimeline> {
        self.read(AggregateState::region_timeline).await
    }

    pub async fn time_series(&self) -> Vec<TimeSeriesPoint> {
        self.read(AggregateState::time_series).await
    }

    pub async fn total_analyzed(&self) -> u64 {
        self.read(AggregateState::total_analyzed).await
    }

    /// Receiver whose value is bumped after every update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.inner.revision.borrow()
    }
}
