//! End-to-end run of the collection loop without the server.

use std::sync::Arc;

use happydex_collectors::{CollectorClient, Ingestor};
use happydex_core::AppConfig;
use happydex_index::{HappinessIndex, IndexLimits};
use happydex_sentiment::SentimentAnalyzer;

/// Run `cycles` collection cycles into a fresh index and print its status.
///
/// Failing sources are logged and skipped, so this also works offline; the
/// result then only reflects the canned sources.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the status cannot
/// be encoded.
pub(crate) async fn run_simulate(config: &AppConfig, cycles: u64) -> anyhow::Result<()> {
    let client = CollectorClient::from_config(config)?;
    let index = HappinessIndex::new(IndexLimits::from(config));
    let ingestor = Ingestor::new(client, Arc::new(SentimentAnalyzer::default()), index);

    for cycle in 0..cycles {
        let report = ingestor.run_cycle(cycle).await;
        eprintln!(
            "cycle {cycle}: {} collected {}, recorded {}",
            report.source, report.collected, report.recorded
        );
    }

    let status = ingestor.index().status().await;
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
