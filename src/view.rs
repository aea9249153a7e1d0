// Derived views over a store snapshot. Pure functions: no locking, no clock reads.

use chrono::{DateTime, Local, TimeDelta, Utc};
use std::time::Duration;

use crate::models::{Counter, Sample};

/// Chart-ready series, oldest first. `labels[i]` is the time of day of `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Difference to the previous point; the first point's change is 0.
    pub fn step_changes(&self) -> Vec<i64> {
        let mut prev = None;
        self.values
            .iter()
            .map(|&v| {
                let change = prev.map_or(0, |p: i64| v.saturating_sub(p));
                prev = Some(v);
                change
            })
            .collect()
    }
}

/// Most recent sample, or `None` before the first successful poll.
pub fn latest(snapshot: &[Sample]) -> Option<Sample> {
    snapshot.last().copied()
}

/// Latest value minus the value of the newest sample captured strictly before `now - window`.
///
/// Returns `None` when the window has no sample older than the cutoff. Decreases are reported
/// as negative numbers.
pub fn trailing_increase(
    snapshot: &[Sample],
    now: DateTime<Utc>,
    window: Duration,
    counter: Counter,
) -> Option<i64> {
    let latest = snapshot.last()?;
    let window = TimeDelta::from_std(window).ok()?;
    let cutoff = now.checked_sub_signed(window)?;
    let baseline = snapshot.iter().rev().find(|s| s.captured_at < cutoff)?;
    Some(latest.counter(counter).saturating_sub(baseline.counter(counter)))
}

/// Up to `max_points` most recent samples of `counter`, oldest first.
pub fn series(snapshot: &[Sample], max_points: usize, counter: Counter) -> Series {
    let start = snapshot.len().saturating_sub(max_points);
    let window = &snapshot[start..];
    Series {
        labels: window.iter().map(|s| time_label(s.captured_at)).collect(),
        values: window.iter().map(|s| s.counter(counter)).collect(),
    }
}

/// Local time of day, `HH:MM:SS`.
pub fn time_label(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// RFC 1123 timestamp in GMT (e.g. `Mon, 02 Jan 2006 15:04:05 GMT`).
pub fn last_updated(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
