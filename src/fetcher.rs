// Upstream stats source: trait used by the poller, plus the reqwest-backed implementation.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::instrument;

use crate::models::{Counters, UpstreamStats};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("upstream reported the request as not successful")]
    UpstreamReportedFailure,
}

impl FetchError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) | FetchError::Status(_) => "network",
            FetchError::Decode(_) => "decode",
            FetchError::UpstreamReportedFailure => "upstream_failure",
        }
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self) -> Result<Counters, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Counters, FetchError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.bytes().await?;
        parse_stats(&body)
    }
}

/// Decodes an upstream body into counters, rejecting `success: false`.
pub fn parse_stats(body: &[u8]) -> Result<Counters, FetchError> {
    let stats: UpstreamStats =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    if !stats.success {
        return Err(FetchError::UpstreamReportedFailure);
    }
    stats
        .record
        .map(Counters::from)
        .ok_or_else(|| FetchError::Decode("missing field `record`".into()))
}
