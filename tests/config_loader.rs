mod common;

use common::temp_config;
use statelink::config::{Config, ConfigError};
use statelink::counter::CounterState;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.initial_state, CounterState::default());
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.step, 1);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("statelink/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = temp_config(
        r#"
[initial_state]
count = 42
result = "restored"

[ui]
tick_rate_ms = 100
step = 5

[logging]
level = "debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.initial_state.count, 42);
    assert_eq!(config.initial_state.result.as_deref(), Some("restored"));
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.step, 5);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_partial_config_fills_defaults() {
    let (_dir, path) = temp_config("[ui]\nstep = 3\n");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.ui.step, 3);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.initial_state, CounterState::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[ui\nstep = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[initial_state]\ncount = \"many\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_non_positive_step_fails_validation() {
    let mut config = Config::default();
    config.ui.step = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    config.ui.step = -2;
    assert!(config.validate().is_err());
}

#[test]
fn test_serialized_config_loads_back() {
    let mut config = Config::default();
    config.initial_state = CounterState::new(7);
    config.ui.step = 2;
    let (_dir, path) = temp_config(&toml::to_string_pretty(&config).unwrap());

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
