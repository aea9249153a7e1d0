// Upstream punishment-stats JSON

use serde::Deserialize;

use super::Counters;

/// Body of the upstream stats endpoint. `record` may be absent when `success` is false.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamStats {
    pub success: bool,
    #[serde(default)]
    pub record: Option<UpstreamRecord>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpstreamRecord {
    pub watchdog_total: i64,
    pub staff_total: i64,
}

impl From<UpstreamRecord> for Counters {
    fn from(r: UpstreamRecord) -> Self {
        Counters {
            watchdog_total: r.watchdog_total,
            staff_total: r.staff_total,
        }
    }
}
