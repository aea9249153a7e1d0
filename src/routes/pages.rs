// HTML page handlers: overview and per-counter charts

use axum::{extract::State, response::Html};
use chrono::Utc;

use super::{AppState, PageError};
use crate::models::Counter;
use crate::render::{self, Overview};
use crate::view;

/// GET / — both totals, trailing increases and the combined chart.
pub(super) async fn overview_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    let snapshot = state.store.snapshot();
    let latest = view::latest(&snapshot).ok_or(PageError::NoData)?;
    let now = Utc::now();
    let window = state.view.increase_window();
    let points = state.view.overview_points;

    let overview = Overview {
        latest,
        watchdog_increase: view::trailing_increase(&snapshot, now, window, Counter::Watchdog),
        staff_increase: view::trailing_increase(&snapshot, now, window, Counter::Staff),
        increase_window: window,
        watchdog: view::series(&snapshot, points, Counter::Watchdog),
        staff: view::series(&snapshot, points, Counter::Staff),
    };
    Ok(Html(render::overview_page(&overview)?))
}

/// GET /watchdog
pub(super) async fn watchdog_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    counter_page(&state, Counter::Watchdog)
}

/// GET /staff
pub(super) async fn staff_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    counter_page(&state, Counter::Staff)
}

// Single-counter pages chart the whole retained window.
fn counter_page(state: &AppState, counter: Counter) -> Result<Html<String>, PageError> {
    let snapshot = state.store.snapshot();
    let latest = view::latest(&snapshot).ok_or(PageError::NoData)?;
    let series = view::series(&snapshot, state.store.capacity(), counter);
    Ok(Html(render::counter_page(counter, &series, &latest)?))
}
