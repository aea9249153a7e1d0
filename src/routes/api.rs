// JSON handlers: current stats and build version

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;

use super::{AppState, PageError};
use crate::models::{ApiStats, Counter, CounterStats};
use crate::view;
use crate::version::{NAME, VERSION};

/// GET /api/stats — latest totals and trailing increases (`null` until enough history).
pub(super) async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiStats>, PageError> {
    let snapshot = state.store.snapshot();
    let latest = view::latest(&snapshot).ok_or(PageError::NoData)?;
    let now = Utc::now();
    let window = state.view.increase_window();
    let counter_stats = |counter: Counter| CounterStats {
        total: latest.counter(counter),
        increase: view::trailing_increase(&snapshot, now, window, counter),
    };

    Ok(Json(ApiStats {
        watchdog: counter_stats(Counter::Watchdog),
        staff: counter_stats(Counter::Staff),
        captured_at: latest.captured_at,
        increase_window_secs: state.view.increase_window_secs,
        sample_count: snapshot.len(),
    }))
}

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}
