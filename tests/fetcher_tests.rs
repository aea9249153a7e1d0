// HttpFetcher tests against a local axum stub of the upstream endpoint

use axum::{Router, http::StatusCode, routing::get};
use banwatch::fetcher::{FetchError, Fetcher, HttpFetcher};
use std::time::Duration;

/// Serves `router` on an ephemeral port and returns the stats URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/stats", addr)
}

fn fetcher(url: String, timeout: Duration) -> HttpFetcher {
    HttpFetcher::new(url, timeout, "banwatch-test").unwrap()
}

#[tokio::test]
async fn http_fetcher_returns_counters() {
    let url = serve(Router::new().route(
        "/stats",
        get(|| async { r#"{"success":true,"record":{"watchdog_total":9001,"staff_total":77}}"# }),
    ))
    .await;
    let c = fetcher(url, Duration::from_secs(5)).fetch().await.unwrap();
    assert_eq!(c.watchdog_total, 9001);
    assert_eq!(c.staff_total, 77);
}

#[tokio::test]
async fn http_fetcher_maps_unsuccessful_flag() {
    let url = serve(Router::new().route(
        "/stats",
        get(|| async { r#"{"success":false,"cause":"Key throttle"}"# }),
    ))
    .await;
    let err = fetcher(url, Duration::from_secs(5)).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::UpstreamReportedFailure));
}

#[tokio::test]
async fn http_fetcher_maps_error_status() {
    let url = serve(Router::new().route(
        "/stats",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    ))
    .await;
    let err = fetcher(url, Duration::from_secs(5)).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s == StatusCode::BAD_GATEWAY));
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn http_fetcher_maps_undecodable_body() {
    let url = serve(Router::new().route("/stats", get(|| async { "not json" }))).await;
    let err = fetcher(url, Duration::from_secs(5)).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn http_fetcher_times_out_slow_upstream() {
    let url = serve(Router::new().route(
        "/stats",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            r#"{"success":true,"record":{"watchdog_total":1,"staff_total":1}}"#
        }),
    ))
    .await;
    let started = std::time::Instant::now();
    let err = fetcher(url, Duration::from_millis(200)).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(ref e) if e.is_timeout()));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn http_fetcher_reports_connection_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let err = fetcher(format!("http://{}/stats", addr), Duration::from_secs(2))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
