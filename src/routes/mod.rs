// HTTP routes: HTML pages plus a small JSON API

mod api;
mod pages;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::config::ViewConfig;
use crate::store::SampleStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<SampleStore>,
    pub(crate) view: ViewConfig,
}

/// Failure of a page or API read.
#[derive(Debug, Error)]
pub enum PageError {
    /// No sample has been stored yet.
    #[error("No stats available")]
    NoData,

    #[error("encoding chart data: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match self {
            PageError::NoData => StatusCode::SERVICE_UNAVAILABLE,
            PageError::Encode(ref e) => {
                tracing::warn!(error = %e, operation = "render_page", "page rendering failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

pub fn app(store: Arc<SampleStore>, view: ViewConfig) -> Router {
    let state = AppState { store, view };
    Router::new()
        .route("/", get(pages::overview_handler)) // GET /
        .route("/watchdog", get(pages::watchdog_handler)) // GET /watchdog
        .route("/staff", get(pages::staff_handler)) // GET /staff
        .route("/api/stats", get(api::stats_handler)) // GET /api/stats
        .route("/version", get(api::version_handler)) // GET /version
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
