// Background poller: fetch, stamp, append, sleep. Runs until the stop signal fires.
// Failed fetches are logged and skipped; the next attempt waits the full interval.

use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::oneshot;
use tokio::time::Duration;
use tracing::Instrument;

use crate::fetcher::{FetchError, Fetcher};
use crate::models::{Counters, Sample};
use crate::store::SampleStore;

/// Fetch outcome counters, shared with whoever wants to report them.
#[derive(Debug, Default)]
pub struct PollStats {
    fetched_total: AtomicU64,
    failed_total: AtomicU64,
}

impl PollStats {
    pub fn fetched(&self) -> u64 {
        self.fetched_total.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed_total.load(Ordering::Relaxed)
    }
}

pub struct PollerDeps {
    pub fetcher: Arc<dyn Fetcher>,
    pub store: Arc<SampleStore>,
    pub stats: Arc<PollStats>,
    pub shutdown_rx: oneshot::Receiver<()>,
}

pub struct PollerConfig {
    pub interval: Duration,
}

pub fn spawn(deps: PollerDeps, config: PollerConfig) -> tokio::task::JoinHandle<()> {
    let PollerDeps {
        fetcher,
        store,
        stats,
        mut shutdown_rx,
    } = deps;
    let PollerConfig { interval } = config;

    let poller_span = tracing::span!(
        tracing::Level::DEBUG,
        "poller",
        interval_ms = interval.as_millis() as u64
    );

    tokio::spawn(
        async move {
            loop {
                tokio::select! {
                    result = fetcher.fetch() => {
                        poll_once(result, &store, &stats);
                    }
                    _ = &mut shutdown_rx => break,
                }
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = &mut shutdown_rx => break,
                }
            }
            tracing::debug!(
                fetched_total = stats.fetched(),
                failed_total = stats.failed(),
                "Poller shutting down"
            );
        }
        .instrument(poller_span),
    )
}

fn poll_once(result: Result<Counters, FetchError>, store: &SampleStore, stats: &PollStats) {
    match result {
        Ok(counters) => {
            let sample = Sample::new(counters, Utc::now());
            store.append(sample);
            stats.fetched_total.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(
                operation = "append",
                watchdog_total = sample.watchdog_total,
                staff_total = sample.staff_total,
                "Sample stored"
            );
        }
        Err(e) => {
            stats.failed_total.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                error = %e,
                kind = e.kind(),
                operation = "fetch_stats",
                "Fetching stats failed; skipping cycle"
            );
        }
    }
}
