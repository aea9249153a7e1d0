// GET /api/stats payload

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterStats {
    pub total: i64,
    /// Increase over the configured window; `null` while there is not enough history.
    pub increase: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStats {
    pub watchdog: CounterStats,
    pub staff: CounterStats,
    pub captured_at: DateTime<Utc>,
    pub increase_window_secs: u64,
    pub sample_count: usize,
}
