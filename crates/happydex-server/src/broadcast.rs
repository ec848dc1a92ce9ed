//! Periodic push of the aggregate to WebSocket clients.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use happydex_core::Source;
use happydex_index::{AggregateState, EnrichedPost, HappinessIndex, RegionTimeline};
use serde::Serialize;
use tokio::sync::{broadcast, watch};

/// Recent posts included in each push.
pub const PUSH_RECENT_POSTS: usize = 8;

/// Envelope sent over `/api/ws`.
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum WsMessage {
    InitialStatus(InitialStatus),
    HappinessUpdate(HappinessUpdate),
}

impl WsMessage {
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the payload cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Serialize)]
pub struct InitialStatus {
    pub current_happiness: f64,
    pub total_analyzed: u64,
    pub source_breakdown: BTreeMap<Source, u64>,
}

impl InitialStatus {
    #[must_use]
    pub fn from_state(state: &AggregateState) -> Self {
        Self {
            current_happiness: round2(state.current_happiness()),
            total_analyzed: state.total_analyzed(),
            source_breakdown: state.source_counts().clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HappinessUpdate {
    pub current_happiness: f64,
    pub total_analyzed: u64,
    pub source_breakdown: BTreeMap<Source, u64>,
    pub country_sentiment: BTreeMap<&'static str, f64>,
    pub recent_posts: Vec<EnrichedPost>,
    pub country_timelines: Vec<RegionTimeline>,
    /// Time since server start as `HH:MM`.
    pub uptime: String,
}

impl HappinessUpdate {
    #[must_use]
    pub fn from_state(state: &AggregateState, uptime: Duration) -> Self {
        Self {
            current_happiness: round2(state.current_happiness()),
            total_analyzed: state.total_analyzed(),
            source_breakdown: state.source_counts().clone(),
            country_sentiment: state.region_snapshot().clone(),
            recent_posts: state.recent_posts(PUSH_RECENT_POSTS),
            country_timelines: state.region_timeline(),
            uptime: format_uptime(uptime),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `HH:MM`, with hours allowed past 99.
#[must_use]
pub fn format_uptime(elapsed: Duration) -> String {
    let minutes = elapsed.as_secs() / 60;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Push a [`HappinessUpdate`] after index changes, at most once per `interval`.
///
/// `revisions` should come from [`HappinessIndex::subscribe`] before this task
/// is spawned so an update landing before the first poll still triggers a
/// push. The current state is checked once on start. Nothing is sent while the
/// index is empty. Runs for as long as any index handle is alive, which for the
/// server is the whole process.
pub async fn run_broadcaster(
    index: HappinessIndex,
    mut revisions: watch::Receiver<u64>,
    updates: broadcast::Sender<Arc<str>>,
    started_at: Instant,
    interval: Duration,
) {
    revisions.mark_changed();

    while revisions.changed().await.is_ok() {
        let elapsed = started_at.elapsed();
        let payload = index
            .read(|s| {
                (s.total_analyzed() > 0)
                    .then(|| WsMessage::HappinessUpdate(HappinessUpdate::from_state(s, elapsed)))
            })
            .await;

        if let Some(message) = payload {
            match message.to_json() {
                Ok(text) => {
                    // Err only means no client is connected right now.
                    let receivers = updates.send(Arc::from(text)).unwrap_or(0);
                    tracing::debug!(receivers, "broadcast happiness update");
                }
                Err(e) => tracing::error!(error = %e, "failed to encode happiness update"),
            }
        }

        tokio::time::sleep(interval).await;
    }
}
