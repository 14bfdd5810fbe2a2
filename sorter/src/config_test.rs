use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_reference_widget() {
    let cfg = SortConfig::default();
    assert_eq!(cfg.size, 20);
    assert_eq!(cfg.min_value, 5);
    assert_eq!(cfg.max_value, 100);
    assert_eq!(cfg.step_delay_ms, 100);
    assert_eq!(cfg.seed, None);
}

#[test]
fn step_delay_converts_millis() {
    let cfg = SortConfig { step_delay_ms: 250, ..SortConfig::default() };
    assert_eq!(cfg.step_delay(), Duration::from_millis(250));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_defaults() {
    assert!(SortConfig::default().validate().is_ok());
}

#[test]
fn validate_rejects_zero_size() {
    let cfg = SortConfig { size: 0, ..SortConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyArray));
}

#[test]
fn validate_rejects_inverted_range() {
    let cfg = SortConfig { min_value: 50, max_value: 10, ..SortConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::InvertedRange { min: 50, max: 10 }));
}

#[test]
fn validate_accepts_single_value_range() {
    let cfg = SortConfig { min_value: 7, max_value: 7, ..SortConfig::default() };
    assert!(cfg.validate().is_ok());
}

// =============================================================
// with_lookup
// =============================================================

#[test]
fn empty_lookup_keeps_defaults() {
    let cfg = SortConfig::default().with_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, SortConfig::default());
}

#[test]
fn lookup_parses_overrides() {
    let cfg = SortConfig::default()
        .with_lookup(lookup_from(&[
            ("CASSETTE_SORT_SIZE", "8"),
            ("CASSETTE_SORT_MIN", "-3"),
            ("CASSETTE_SORT_MAX", " 12 "),
            ("CASSETTE_STEP_DELAY_MS", "0"),
            ("CASSETTE_SORT_SEED", "42"),
        ]))
        .unwrap();
    assert_eq!(
        cfg,
        SortConfig { size: 8, min_value: -3, max_value: 12, step_delay_ms: 0, seed: Some(42) }
    );
}

#[test]
fn lookup_overlays_the_receiver_not_the_defaults() {
    let base = SortConfig { size: 4, seed: Some(9), ..SortConfig::default() };
    let cfg = base.with_lookup(lookup_from(&[("CASSETTE_SORT_MAX", "50")])).unwrap();
    assert_eq!(cfg, SortConfig { max_value: 50, ..base });
}

#[test]
fn blank_value_keeps_current() {
    let cfg = SortConfig::default().with_lookup(lookup_from(&[("CASSETTE_SORT_SIZE", "  ")])).unwrap();
    assert_eq!(cfg.size, 20);
}

#[test]
fn lookup_rejects_garbage() {
    let err = SortConfig::default()
        .with_lookup(lookup_from(&[("CASSETTE_STEP_DELAY_MS", "fast")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidEnv { key: "CASSETTE_STEP_DELAY_MS", value: "fast".into() });
}

#[test]
fn lookup_rejects_negative_size() {
    let err = SortConfig::default().with_lookup(lookup_from(&[("CASSETTE_SORT_SIZE", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnv { key: "CASSETTE_SORT_SIZE", .. }));
}

#[test]
fn lookup_leaves_validation_to_caller() {
    let cfg = SortConfig::default()
        .with_lookup(lookup_from(&[("CASSETTE_SORT_MIN", "90"), ("CASSETTE_SORT_MAX", "10")]))
        .unwrap();
    assert_eq!(cfg.validate(), Err(ConfigError::InvertedRange { min: 90, max: 10 }));
}

// =============================================================
// Errors and serde
// =============================================================

#[test]
fn error_messages_are_readable() {
    assert_eq!(ConfigError::EmptyArray.to_string(), "array size must be positive");
    assert_eq!(
        ConfigError::InvertedRange { min: 9, max: 1 }.to_string(),
        "min value 9 exceeds max value 1"
    );
}

#[test]
fn serde_omits_missing_seed() {
    let json = serde_json::to_value(SortConfig::default()).unwrap();
    assert!(json.get("seed").is_none());
    let back: SortConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, SortConfig::default());
}
