// Sample and counter selector

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The two ban counters as returned by one successful fetch, before timestamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub watchdog_total: i64,
    pub staff_total: i64,
}

/// One successfully fetched and timestamped pair of counters.
///
/// `captured_at` is assigned by the poller when the fetch completes, not by the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub watchdog_total: i64,
    pub staff_total: i64,
    pub captured_at: DateTime<Utc>,
}

impl Sample {
    pub fn new(counters: Counters, captured_at: DateTime<Utc>) -> Self {
        Self {
            watchdog_total: counters.watchdog_total,
            staff_total: counters.staff_total,
            captured_at,
        }
    }

    pub fn counter(&self, counter: Counter) -> i64 {
        match counter {
            Counter::Watchdog => self.watchdog_total,
            Counter::Staff => self.staff_total,
        }
    }
}

/// Selects one of the two counters carried by a [`Sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Watchdog,
    Staff,
}

impl Counter {
    /// Path segment and DOM id prefix (e.g. "watchdog").
    pub fn slug(self) -> &'static str {
        match self {
            Counter::Watchdog => "watchdog",
            Counter::Staff => "staff",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Counter::Watchdog => "Watchdog",
            Counter::Staff => "Staff",
        }
    }

    /// Chart line colour.
    pub fn color(self) -> &'static str {
        match self {
            Counter::Watchdog => "rgb(75, 192, 192)",
            Counter::Staff => "rgb(255, 99, 132)",
        }
    }
}
