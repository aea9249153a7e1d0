// Build-time identity, used by GET /version and the default upstream User-Agent

/// Crate name as published in Cargo.toml.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Crate version as published in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `name/version`, sent as the upstream User-Agent unless configured.
pub fn user_agent() -> String {
    format!("{NAME}/{VERSION}")
}
