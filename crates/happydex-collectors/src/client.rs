use std::time::Duration;

use happydex_core::{AppConfig, Source};
use reqwest::Client;

use crate::error::CollectorError;
use crate::types::CollectedPost;
use crate::{mastodon, pools, reddit};

const REDDIT_BASE_URL: &str = "https://www.reddit.com";
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Where the live collectors send their requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub reddit_base_url: String,
    /// Base URLs of the Mastodon instances to sample from.
    pub mastodon_instances: Vec<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            reddit_base_url: REDDIT_BASE_URL.to_string(),
            mastodon_instances: mastodon::INSTANCES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Fetches a batch of posts from any [`Source`].
///
/// Reddit and Mastodon are fetched over HTTP; the other sources are drawn
/// from fixed pools.
#[derive(Debug, Clone)]
pub struct CollectorClient {
    client: Client,
    endpoints: Endpoints,
}

impl CollectorClient {
    /// A `timeout_secs` of zero disables the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the underlying client cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CollectorError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent);
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        Ok(Self {
            client: builder.build()?,
            endpoints: Endpoints::default(),
        })
    }

    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the underlying client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, CollectorError> {
        Self::new(config.http_timeout_secs, &config.user_agent)
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// One batch of posts from `source`. May be empty.
    ///
    /// Reddit falls back to a canned pool when no subreddit answers.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError`] when every Mastodon instance tried failed.
    pub async fn fetch(&self, source: Source) -> Result<Vec<CollectedPost>, CollectorError> {
        let posts = match source {
            Source::Reddit => {
                reddit::fetch_random(&self.client, &self.endpoints.reddit_base_url).await
            }
            Source::Mastodon => {
                mastodon::fetch_random(&self.client, &self.endpoints.mastodon_instances).await?
            }
            Source::GoogleTrends => pools::google_trends(),
            Source::Youtube => pools::youtube(),
            Source::News => pools::news(),
            Source::Twitter => pools::twitter(),
            Source::Forums => pools::forums(),
        };

        tracing::debug!(source = %source, count = posts.len(), "collected posts");
        Ok(posts)
    }

    /// Newest posts of one subreddit, without sampling or fallback.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError`] if the request or decoding fails.
    pub async fn subreddit(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<CollectedPost>, CollectorError> {
        reddit::fetch_subreddit(&self.client, &self.endpoints.reddit_base_url, name, limit).await
    }

    /// Public timeline of one instance, without sampling.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError`] if the request or decoding fails.
    pub async fn timeline(
        &self,
        instance_base_url: &str,
        limit: u32,
    ) -> Result<Vec<CollectedPost>, CollectorError> {
        mastodon::fetch_timeline(&self.client, instance_base_url, limit).await
    }
}
