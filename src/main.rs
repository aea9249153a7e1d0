use anyhow::Result;
use banwatch::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;

    let store = Arc::new(store::SampleStore::new(app_config.polling.capacity));
    let fetcher = Arc::new(fetcher::HttpFetcher::new(
        app_config.upstream.url.clone(),
        app_config.upstream_timeout(),
        &app_config.upstream.user_agent,
    )?);
    let poll_stats = Arc::new(poller::PollStats::default());
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    tracing::info!(
        url = fetcher.url(),
        interval_secs = app_config.polling.interval_secs,
        capacity = app_config.polling.capacity,
        "Starting poller"
    );
    let poller_handle = poller::spawn(
        poller::PollerDeps {
            fetcher,
            store: store.clone(),
            stats: poll_stats.clone(),
            shutdown_rx,
        },
        poller::PollerConfig {
            interval: app_config.poll_interval(),
        },
    );

    let app = routes::app(store, app_config.view.clone());
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Received shutdown signal");
    let _ = shutdown_tx.send(());
    let _ = poller_handle.await;
    tracing::info!(
        fetched_total = poll_stats.fetched(),
        failed_total = poll_stats.failed(),
        "Stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
