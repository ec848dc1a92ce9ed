mod api;
mod broadcast;
mod middleware;
mod scheduler;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use happydex_collectors::{CollectorClient, Ingestor};
use happydex_index::{HappinessIndex, IndexLimits};
use happydex_sentiment::SentimentAnalyzer;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, default_rate_limit_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = happydex_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let index = HappinessIndex::new(IndexLimits::from(&config));
    let analyzer = Arc::new(SentimentAnalyzer::default());
    let state = AppState::new(index.clone(), Arc::clone(&analyzer));

    // Subscribe before any collection job can record.
    tokio::spawn(broadcast::run_broadcaster(
        index.clone(),
        index.subscribe(),
        state.updates.clone(),
        state.started_at,
        Duration::from_secs(config.broadcast_interval_secs),
    ));

    let client = CollectorClient::from_config(&config)?;
    let ingestor = Arc::new(Ingestor::new(client, analyzer, index));
    let _scheduler =
        scheduler::build_scheduler(ingestor, config.collection_interval_secs).await?;

    let app = build_app(state, default_rate_limit_state());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = ?config.env, "happiness index listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
