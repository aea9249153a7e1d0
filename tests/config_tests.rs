// Config loading and validation tests

use banwatch::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8080
host = "0.0.0.0"

[upstream]
url = "http://127.0.0.1:9000/punishmentstats"
timeout_secs = 5

[polling]
interval_secs = 15
capacity = 24

[view]
increase_window_secs = 300
overview_points = 20
"#;

const MINIMAL_CONFIG: &str = r#"
[server]
port = 80
host = "127.0.0.1"

[upstream]
url = "http://stats.local/api"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.upstream.url, "http://127.0.0.1:9000/punishmentstats");
    assert_eq!(config.upstream.timeout_secs, 5);
    assert_eq!(config.polling.capacity, 24);
    assert_eq!(config.view.overview_points, 20);
    assert_eq!(config.poll_interval().as_secs(), 15);
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("minimal config");
    assert_eq!(config.upstream.timeout_secs, 10);
    assert!(config.upstream.user_agent.starts_with("banwatch/"));
    assert_eq!(config.upstream.user_agent, banwatch::version::user_agent());
    assert_eq!(config.polling.interval_secs, 15);
    assert_eq!(config.polling.capacity, 24);
    assert_eq!(config.view.increase_window().as_secs(), 300);
    assert_eq!(config.view.overview_points, 20);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8080", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_url() {
    let bad = VALID_CONFIG.replace("url = \"http://127.0.0.1:9000/punishmentstats\"", "url = \" \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("upstream.url"));
}

#[test]
fn test_config_validation_rejects_timeout_zero() {
    let bad = VALID_CONFIG.replace("timeout_secs = 5", "timeout_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn test_config_validation_rejects_interval_zero() {
    let bad = VALID_CONFIG.replace("interval_secs = 15", "interval_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("polling.interval_secs"));
}

#[test]
fn test_config_validation_rejects_capacity_zero() {
    let bad = VALID_CONFIG.replace("capacity = 24", "capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("polling.capacity"));
}

#[test]
fn test_config_validation_rejects_window_zero() {
    let bad = VALID_CONFIG.replace("increase_window_secs = 300", "increase_window_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("increase_window_secs"));
}

#[test]
fn test_config_validation_rejects_overview_points_above_capacity() {
    let bad = VALID_CONFIG.replace("overview_points = 20", "overview_points = 30");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("overview_points"));
}

#[test]
fn test_config_validation_rejects_missing_upstream() {
    let err = AppConfig::load_from_str("[server]\nport = 80\nhost = \"0.0.0.0\"\n").unwrap_err();
    assert!(err.to_string().contains("upstream"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.polling.capacity, 24);
}
