use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use happydex_index::{EnrichedPost, RegionTimeline, StatusSnapshot, TimeSeriesPoint};
use serde::{Deserialize, Serialize};

use super::AppState;

const DEFAULT_RECENT_LIMIT: usize = 20;
const MAX_RECENT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub(super) struct RecentPostsQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct CountryTimelineResponse {
    pub countries: Vec<RegionTimeline>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(super) struct TimeSeriesResponse {
    pub points: Vec<TimeSeriesPoint>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Clamp a requested page size into `1..=50`, defaulting to 20.
pub(super) fn normalize_recent_limit(limit: Option<i64>) -> usize {
    limit.map_or(DEFAULT_RECENT_LIMIT, |l| {
        usize::try_from(l.max(1)).map_or(MAX_RECENT_LIMIT, |l| l.min(MAX_RECENT_LIMIT))
    })
}

pub(super) async fn status(State(state): State<AppState>) -> Json<StatusSnapshot> {
    Json(state.index.status().await)
}

pub(super) async fn recent_posts(
    State(state): State<AppState>,
    Query(query): Query<RecentPostsQuery>,
) -> Json<Vec<EnrichedPost>> {
    Json(
        state
            .index
            .recent_posts(normalize_recent_limit(query.limit))
            .await,
    )
}

pub(super) async fn country_timeline(
    State(state): State<AppState>,
) -> Json<CountryTimelineResponse> {
    let (countries, last_updated) = state
        .index
        .read(|s| (s.region_timeline(), s.last_updated()))
        .await;
    Json(CountryTimelineResponse {
        countries,
        last_updated,
    })
}

pub(super) async fn time_series(State(state): State<AppState>) -> Json<TimeSeriesResponse> {
    let (points, last_updated) = state
        .index
        .read(|s| (s.time_series(), s.last_updated()))
        .await;
    Json(TimeSeriesResponse {
        points,
        last_updated,
    })
}
