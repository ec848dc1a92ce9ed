//! Concurrent use of the shared index handle.

use happydex_core::Source;
use happydex_index::{FixedJitter, HappinessIndex, IndexError, IndexLimits, PostRecord, REGIONS};
use happydex_sentiment::SentimentAnalyzer;
use serde_json::Map;

fn deterministic_index() -> HappinessIndex {
    HappinessIndex::with_jitter(IndexLimits::default(), Box::new(FixedJitter::default()))
}

fn post(text: &str, source: Source) -> PostRecord {
    PostRecord {
        id: text.replace(' ', "-"),
        source,
        text: text.to_string(),
        timestamp: chrono::Utc::now(),
        url: Some("https://example.com/p".to_string()),
        metadata: Map::new(),
    }
}

#[tokio::test]
async fn concurrent_writers_keep_counters_consistent() {
    let index = deterministic_index();
    let analyzer = std::sync::Arc::new(SentimentAnalyzer::default());

    let mut handles = Vec::new();
    for (i, source) in Source::ALL.iter().copied().enumerate() {
        let index = index.clone();
        let analyzer = analyzer.clone();
        handles.push(tokio::spawn(async move {
            for n in 0..10 {
                let text = if (i + n) % 2 == 0 {
                    "what a wonderful day"
                } else {
                    "this is terrible"
                };
                let scored = analyzer.analyze(Some(text), source);
                index.record(scored, source, None).await;
            }
        }));
    }
    for handle in handles {
        handle.await.expect("writer task");
    }

    let (total, per_source_sum, mean, scores) = index
        .read(|s| {
            let scores: Vec<f64> = s.rolling_scores().iter().copied().collect();
            (
                s.total_analyzed(),
                s.source_counts().values().sum::<u64>(),
                s.current_happiness(),
                scores,
            )
        })
        .await;

    assert_eq!(total, 70);
    assert_eq!(per_source_sum, 70);
    #[allow(clippy::cast_precision_loss)]
    let expected = scores.iter().sum::<f64>() / scores.len() as f64;
    assert!((mean - expected).abs() < 1e-9);
    assert_eq!(index.revision(), 70);
}

#[tokio::test]
async fn named_record_rejects_unknown_source_without_mutation() {
    let index = deterministic_index();
    let scored = SentimentAnalyzer::default().analyze(Some("good"), Source::Reddit);

    let err = index
        .record_named(scored.clone(), "myspace", None)
        .await
        .unwrap_err();
    assert_eq!(err, IndexError::InvalidSource("myspace".to_string()));
    assert_eq!(index.total_analyzed().await, 0);
    assert_eq!(index.revision(), 0);

    let revision = index
        .record_named(scored, "google_trends", None)
        .await
        .expect("known source");
    assert_eq!(revision, 1);
    assert_eq!(index.status().await.source_breakdown[&Source::GoogleTrends], 1);
}

#[tokio::test]
async fn subscribers_observe_each_update() {
    let index = deterministic_index();
    let mut rx = index.subscribe();
    assert_eq!(*rx.borrow_and_update(), 0);

    let writer = index.clone();
    tokio::spawn(async move {
        let scored = SentimentAnalyzer::default().analyze(Some("nice"), Source::News);
        writer.record(scored, Source::News, None).await;
    });

    rx.changed().await.expect("sender alive");
    assert_eq!(*rx.borrow_and_update(), 1);
    assert_eq!(index.total_analyzed().await, 1);
}

#[tokio::test]
async fn read_api_reflects_recorded_posts() {
    let index = deterministic_index();
    let analyzer = SentimentAnalyzer::default();

    for text in ["first good post", "second sad post"] {
        let scored = analyzer.analyze(Some(text), Source::Mastodon);
        index
            .record(scored, Source::Mastodon, Some(post(text, Source::Mastodon)))
            .await;
    }

    let recent = index.recent_posts(20).await;
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].post.text, "second sad post");

    let status = index.status().await;
    assert_eq!(status.total_posts_analyzed, 2);
    assert_eq!(status.happiness_trend.len(), 2);
    assert_eq!(status.country_sentiment.len(), REGIONS.len());

    let timeline = index.region_timeline().await;
    assert_eq!(timeline.len(), REGIONS.len());
    assert!(timeline.iter().all(|r| r.timeline.len() == 2));

    assert_eq!(index.time_series().await.len(), 2);
}
