//! One-off collector fetch with per-post scores.

use happydex_collectors::CollectorClient;
use happydex_core::{AppConfig, Source};
use happydex_sentiment::SentimentAnalyzer;

/// Widest text column before truncation.
const TEXT_COLUMN: usize = 60;

/// Fetch one batch from `source` and print each post with its score.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the collector
/// fails outright.
pub(crate) async fn run_sample(config: &AppConfig, source: Source) -> anyhow::Result<()> {
    let client = CollectorClient::from_config(config)?;
    let analyzer = SentimentAnalyzer::default();

    let posts = client.fetch(source).await?;
    if posts.is_empty() {
        println!("no posts collected from {source}");
        return Ok(());
    }

    println!("{:<10}{:<10}TEXT", "SCORE", "LABEL");
    for post in &posts {
        let scored = analyzer.analyze(Some(&post.text), source);
        println!(
            "{:<10}{:<10}{}",
            scored.happiness_score,
            scored.label.to_string(),
            clip(&post.text, TEXT_COLUMN)
        );
    }

    Ok(())
}

/// First `width` characters of `text` on one line, with an ellipsis when cut.
pub(crate) fn clip(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= width {
        return flat;
    }
    let mut clipped: String = flat.chars().take(width.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}
