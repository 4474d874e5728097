//! Environment overrides on top of the TOML configuration.

mod support;

use std::path::PathBuf;

use route_dashboard::config::DashboardConfig;

use support::with_scoped_env;

#[test]
fn test_env_overrides_file_values() {
    let config = DashboardConfig::from_toml_str("[server]\nport = 3000\n").unwrap();

    let config = with_scoped_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9999")),
            ("DATA_PATH", Some("/srv/routes.json")),
            ("WEATHER_BASE_URL", Some("http://127.0.0.1:1/forecast")),
        ],
        || config.with_env_overrides(),
    )
    .unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:9999");
    assert_eq!(config.data.path, PathBuf::from("/srv/routes.json"));
    assert_eq!(config.weather.base_url, "http://127.0.0.1:1/forecast");
}

#[test]
fn test_without_env_keeps_file_values() {
    let config = DashboardConfig::from_toml_str("[server]\nport = 3000\n").unwrap();

    let config = with_scoped_env(
        &[
            ("HOST", None),
            ("PORT", None),
            ("DATA_PATH", None),
            ("WEATHER_BASE_URL", None),
        ],
        || config.with_env_overrides(),
    )
    .unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:3000");
}

#[test]
fn test_bad_port_in_env() {
    let result = with_scoped_env(&[("PORT", Some("not-a-port"))], || {
        DashboardConfig::default().with_env_overrides()
    });
    assert!(result.is_err());
}
