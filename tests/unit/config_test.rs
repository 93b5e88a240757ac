//! Tests for configuration validation

use std::collections::HashMap;
use std::time::Duration;

use frame_budget::config::{SchedulerConfig, ENV_FRAME_BUDGET_MS, ENV_FRAME_INTERVAL_MS};

#[test]
fn test_default_config() {
    let config = SchedulerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.frame_budget(), Duration::from_micros(16_600));
    assert_eq!(config.frame_interval(), Duration::from_micros(16_667));
}

#[test]
fn test_invalid_budget() {
    for budget in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = SchedulerConfig {
            frame_budget_ms: budget,
            ..SchedulerConfig::default()
        };
        assert!(config.validate().is_err(), "budget {budget} accepted");
    }
}

#[test]
fn test_invalid_interval() {
    let config = SchedulerConfig {
        frame_interval_ms: 0.0,
        ..SchedulerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_sub_microsecond_values_rejected() {
    let budget = SchedulerConfig {
        frame_budget_ms: 0.0004,
        ..SchedulerConfig::default()
    };
    assert_eq!(budget.frame_budget(), Duration::ZERO);
    assert!(budget.validate().is_err());

    let interval = SchedulerConfig {
        frame_interval_ms: 0.0004,
        ..SchedulerConfig::default()
    };
    assert_eq!(interval.frame_interval(), Duration::ZERO);
    assert!(interval.validate().is_err());

    assert!(SchedulerConfig::from_json_str(r#"{ "frame_interval_ms": 0.0004 }"#).is_err());
}

#[test]
fn test_smallest_accepted_values() {
    let config = SchedulerConfig {
        frame_budget_ms: 0.001,
        frame_interval_ms: 0.001,
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.frame_budget(), Duration::from_micros(1));
    assert_eq!(config.frame_interval(), Duration::from_micros(1));
}

#[test]
fn test_config_from_json() {
    let json = r#"{ "frame_budget_ms": 8.3, "frame_interval_ms": 8.333 }"#;
    let config = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(config.frame_budget(), Duration::from_micros(8_300));
    assert_eq!(config.frame_interval(), Duration::from_micros(8_333));
}

#[test]
fn test_config_from_json_defaults_missing_fields() {
    let config = SchedulerConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SchedulerConfig::default());
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(SchedulerConfig::from_json_str(r#"{ "frame_budget_ms": 0 }"#).is_err());
    assert!(SchedulerConfig::from_json_str("not json").is_err());
}

#[test]
fn test_config_from_lookup() {
    let vars: HashMap<&str, &str> = [(ENV_FRAME_BUDGET_MS, " 10 "), (ENV_FRAME_INTERVAL_MS, "5")]
        .into_iter()
        .collect();
    let config = SchedulerConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string())).unwrap();
    assert_eq!(config.frame_budget(), Duration::from_millis(10));
    assert_eq!(config.frame_interval(), Duration::from_millis(5));
}

#[test]
fn test_config_from_lookup_empty_uses_defaults() {
    let config = SchedulerConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, SchedulerConfig::default());
}

#[test]
fn test_config_from_lookup_rejects_garbage() {
    let err = SchedulerConfig::from_lookup(|key| {
        (key == ENV_FRAME_BUDGET_MS).then(|| "fast".to_string())
    })
    .unwrap_err();
    assert!(err.to_string().contains(ENV_FRAME_BUDGET_MS));

    assert!(SchedulerConfig::from_lookup(|key| {
        (key == ENV_FRAME_INTERVAL_MS).then(|| "-3".to_string())
    })
    .is_err());
}

#[test]
fn test_config_serde_roundtrip_field_names() {
    let value = serde_json::to_value(SchedulerConfig::default()).unwrap();
    assert_eq!(value["frame_budget_ms"], 16.6);
    assert_eq!(value["frame_interval_ms"], 16.667);
}
