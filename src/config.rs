use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    crate::version::user_agent()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Max number of samples kept in memory; the oldest is evicted first.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_interval_secs() -> u64 {
    15
}

fn default_capacity() -> usize {
    24
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Lookback for the per-counter "banned in the last window" increase.
    #[serde(default = "default_increase_window_secs")]
    pub increase_window_secs: u64,
    /// Points on the combined chart of the overview page.
    #[serde(default = "default_overview_points")]
    pub overview_points: usize,
}

fn default_increase_window_secs() -> u64 {
    300
}

fn default_overview_points() -> usize {
    20
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            increase_window_secs: default_increase_window_secs(),
            overview_points: default_overview_points(),
        }
    }
}

impl ViewConfig {
    pub fn increase_window(&self) -> Duration {
        Duration::from_secs(self.increase_window_secs)
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.polling.interval_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_secs)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.upstream.url.trim().is_empty(),
            "upstream.url must be non-empty"
        );
        anyhow::ensure!(
            self.upstream.timeout_secs > 0,
            "upstream.timeout_secs must be > 0, got {}",
            self.upstream.timeout_secs
        );
        anyhow::ensure!(
            self.polling.interval_secs > 0,
            "polling.interval_secs must be > 0, got {}",
            self.polling.interval_secs
        );
        anyhow::ensure!(
            self.polling.capacity > 0,
            "polling.capacity must be > 0, got {}",
            self.polling.capacity
        );
        anyhow::ensure!(
            self.view.increase_window_secs > 0,
            "view.increase_window_secs must be > 0, got {}",
            self.view.increase_window_secs
        );
        anyhow::ensure!(
            self.view.overview_points > 0,
            "view.overview_points must be > 0, got {}",
            self.view.overview_points
        );
        anyhow::ensure!(
            self.view.overview_points <= self.polling.capacity,
            "view.overview_points ({}) must not exceed polling.capacity ({})",
            self.view.overview_points,
            self.polling.capacity
        );
        Ok(())
    }
}
