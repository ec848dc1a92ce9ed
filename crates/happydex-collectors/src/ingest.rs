//! One collection cycle: fetch a source, score each post, record it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use happydex_core::Source;
use happydex_index::{HappinessIndex, PostRecord};
use happydex_sentiment::SentimentAnalyzer;
use uuid::Uuid;

use crate::client::CollectorClient;
use crate::error::CollectorError;
use crate::types::CollectedPost;

/// Display text is cut to this many characters.
pub const DISPLAY_TEXT_CHARS: usize = 300;

/// Outcome of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub source: Source,
    pub collected: usize,
    pub recorded: usize,
}

/// Drives collectors into the index.
///
/// Each cycle handles one source, rotating through [`Source::ALL`].
#[derive(Debug, Clone)]
pub struct Ingestor {
    client: CollectorClient,
    analyzer: Arc<SentimentAnalyzer>,
    index: HappinessIndex,
}

impl Ingestor {
    #[must_use]
    pub fn new(
        client: CollectorClient,
        analyzer: Arc<SentimentAnalyzer>,
        index: HappinessIndex,
    ) -> Self {
        Self {
            client,
            analyzer,
            index,
        }
    }

    #[must_use]
    pub fn index(&self) -> &HappinessIndex {
        &self.index
    }

    /// Source handled by cycle number `cycle`.
    #[must_use]
    pub fn source_for_cycle(cycle: u64) -> Source {
        let len = Source::ALL.len() as u64;
        let slot = usize::try_from(cycle % len).unwrap_or_default();
        Source::ALL[slot]
    }

    /// Run cycle `cycle`. Collector failures are logged and yield an empty report.
    pub async fn run_cycle(&self, cycle: u64) -> CycleReport {
        let source = Self::source_for_cycle(cycle);
        match self.ingest(source).await {
            Ok(report) => {
                tracing::info!(
                    cycle,
                    source = %source,
                    collected = report.collected,
                    recorded = report.recorded,
                    "collection cycle complete"
                );
                report
            }
            Err(e) => {
                tracing::warn!(cycle, source = %source, error = %e, "collection failed");
                CycleReport {
                    source,
                    collected: 0,
                    recorded: 0,
                }
            }
        }
    }

    /// Fetch one batch from `source` and record every post with text.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError`] if the collector fails; nothing is recorded.
    pub async fn ingest(&self, source: Source) -> Result<CycleReport, CollectorError> {
        let posts = self.client.fetch(source).await?;
        let collected = posts.len();
        let mut recorded = 0;

        for post in posts {
            if post.text.is_empty() {
                continue;
            }
            let scored = self.analyzer.analyze(Some(&post.text), source);
            tracing::debug!(
                source = %source,
                happiness = scored.happiness_score,
                label = %scored.label,
                "scored post"
            );
            let record = to_record(post, Utc::now());
            self.index.record(scored, source, Some(record)).await;
            recorded += 1;
        }

        Ok(CycleReport {
            source,
            collected,
            recorded,
        })
    }
}

/// Display record for `post`, with a fresh id and the text shortened.
#[must_use]
pub fn to_record(post: CollectedPost, now: DateTime<Utc>) -> PostRecord {
    PostRecord {
        id: Uuid::new_v4().to_string(),
        source: post.source,
        text: display_text(&post.text),
        timestamp: now,
        url: post.url,
        metadata: post.metadata,
    }
}

fn display_text(text: &str) -> String {
    if text.chars().count() > DISPLAY_TEXT_CHARS {
        let cut: String = text.chars().take(DISPLAY_TEXT_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_follows_source_order() {
        assert_eq!(Ingestor::source_for_cycle(0), Source::Reddit);
        assert_eq!(Ingestor::source_for_cycle(1), Source::Mastodon);
        assert_eq!(Ingestor::source_for_cycle(6), Source::Forums);
        assert_eq!(Ingestor::source_for_cycle(7), Source::Reddit);
        assert_eq!(Ingestor::source_for_cycle(16), Source::GoogleTrends);
    }

    #[test]
    fn long_text_is_shortened_by_characters() {
        let long = "é".repeat(DISPLAY_TEXT_CHARS + 5);
        let shown = display_text(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), DISPLAY_TEXT_CHARS + 3);
    }

    #[test]
    fn short_text_is_kept() {
        assert_eq!(display_text("hello there"), "hello there");
        let exact = "a".repeat(DISPLAY_TEXT_CHARS);
        assert_eq!(display_text(&exact), exact);
    }

    #[test]
    fn record_keeps_url_and_metadata() {
        let post = CollectedPost::new("x1", Source::News, "Headline text here")
            .with_url("https://news.example/1")
            .with_meta("category", "world");
        let record = to_record(post, Utc::now());
        assert_eq!(record.source, Source::News);
        assert_eq!(record.url.as_deref(), Some("https://news.example/1"));
        assert_eq!(record.metadata["category"], "world");
        assert_ne!(record.id, "x1");
    }
}
