//! Mastodon public timelines.

use std::sync::LazyLock;

use futures::future::join_all;
use happydex_core::Source;
use rand::seq::{IndexedRandom, SliceRandom};
use regex::Regex;
use serde::Deserialize;

use crate::error::CollectorError;
use crate::types::{CollectedPost, MIN_TEXT_CHARS};

pub(crate) const INSTANCES: &[&str] = &[
    "https://mastodon.social",
    "https://mastodon.world",
    "https://mstdn.social",
    "https://fosstodon.org",
];

const INSTANCES_PER_FETCH: usize = 2;
const TIMELINE_LIMIT: u32 = 10;
/// Posts returned per fetch.
const SAMPLE_SIZE: usize = 2;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid html tag regex"));

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Status {
    id: String,
    content: String,
    url: Option<String>,
    favourites_count: i64,
    reblogs_count: i64,
}

/// Text of a status with markup removed.
fn strip_html(content: &str) -> String {
    TAG_RE.replace_all(content, "").trim().to_string()
}

/// Host part of an instance base URL, used as the `instance` label.
fn instance_name(base_url: &str) -> &str {
    base_url
        .trim_end_matches('/')
        .split_once("://")
        .map_or(base_url, |(_, host)| host)
}

fn to_post(status: Status, instance: &str) -> Option<CollectedPost> {
    let text = strip_html(&status.content);
    if text.chars().count() < MIN_TEXT_CHARS {
        return None;
    }
    Some(
        CollectedPost::new(status.id, Source::Mastodon, text)
            .with_url(status.url.unwrap_or_default())
            .with_meta("instance", instance)
            .with_meta("favourites_count", status.favourites_count)
            .with_meta("reblogs_count", status.reblogs_count),
    )
}

/// Federated public timeline of one instance.
///
/// # Errors
///
/// Returns [`CollectorError`] on transport failure, a non-2xx status, or an
/// unparseable body.
pub async fn fetch_timeline(
    client: &reqwest::Client,
    base_url: &str,
    limit: u32,
) -> Result<Vec<CollectedPost>, CollectorError> {
    let endpoint = format!("{}/api/v1/timelines/public", base_url.trim_end_matches('/'));
    let response = client
        .get(&endpoint)
        .query(&[("limit", limit.to_string().as_str()), ("local", "false")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(CollectorError::UnexpectedStatus {
            endpoint,
            status: response.status().as_u16(),
        });
    }

    let statuses: Vec<Status> = response.json().await?;
    let instance = instance_name(base_url);
    Ok(statuses
        .into_iter()
        .filter_map(|status| to_post(status, instance))
        .collect())
}

/// Up to [`SAMPLE_SIZE`] posts from two random instances.
///
/// A failing instance is logged and skipped; the fetch only fails when every
/// picked instance failed.
pub(crate) async fn fetch_random(
    client: &reqwest::Client,
    instances: &[String],
) -> Result<Vec<CollectedPost>, CollectorError> {
    let picked: Vec<String> = instances
        .choose_multiple(&mut rand::rng(), INSTANCES_PER_FETCH)
        .cloned()
        .collect();

    let pages = join_all(picked.iter().map(|instance| async move {
        (
            instance,
            fetch_timeline(client, instance, TIMELINE_LIMIT).await,
        )
    }))
    .await;

    let mut posts = Vec::new();
    let mut last_error = None;
    let mut succeeded = 0_usize;
    for (instance, page) in pages {
        match page {
            Ok(page) => {
                succeeded += 1;
                posts.extend(page);
            }
            Err(e) => {
                tracing::warn!(instance = %instance, error = %e, "mastodon timeline failed");
                last_error = Some(e);
            }
        }
    }

    if succeeded == 0 {
        if let Some(e) = last_error {
            return Err(e);
        }
    }

    posts.shuffle(&mut rand::rng());
    posts.truncate(SAMPLE_SIZE);
    Ok(posts)
}
