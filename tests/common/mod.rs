// Shared test helpers
#![allow(dead_code)]

use async_trait::async_trait;
use banwatch::fetcher::{FetchError, Fetcher};
use banwatch::models::{Counters, Sample};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed epoch offset so tests don't depend on the current date.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

pub fn counters(watchdog: i64, staff: i64) -> Counters {
    Counters {
        watchdog_total: watchdog,
        staff_total: staff,
    }
}

pub fn sample(secs: i64, watchdog: i64, staff: i64) -> Sample {
    Sample::new(counters(watchdog, staff), at(secs))
}

/// Fetcher that replays a fixed script, then reports upstream failure forever.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<Counters, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<Result<Counters, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self) -> Result<Counters, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::UpstreamReportedFailure))
    }
}
