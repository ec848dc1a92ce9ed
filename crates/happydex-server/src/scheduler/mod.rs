//! Background collection job.
//!
//! Registers one repeated job that rotates through the sources, scoring and
//! recording each batch into the shared index.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use happydex_collectors::Ingestor;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Builds and starts the scheduler with the collection job.
///
/// The returned handle must be kept alive; dropping it stops collection.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised, the
/// job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    ingestor: Arc<Ingestor>,
    interval_secs: u64,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    register_collection_job(&scheduler, ingestor, Duration::from_secs(interval_secs)).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

async fn register_collection_job(
    scheduler: &JobScheduler,
    ingestor: Arc<Ingestor>,
    interval: Duration,
) -> Result<(), JobSchedulerError> {
    let cycle = Arc::new(AtomicU64::new(0));

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let ingestor = Arc::clone(&ingestor);
        let cycle = cycle.fetch_add(1, Ordering::Relaxed);

        Box::pin(async move {
            let report = ingestor.run_cycle(cycle).await;
            tracing::debug!(
                cycle,
                source = %report.source,
                recorded = report.recorded,
                "scheduler: collection cycle finished"
            );
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(
        interval_secs = interval.as_secs(),
        "scheduler: collection job registered"
    );
    Ok(())
}
