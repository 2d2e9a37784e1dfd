use tally_core::config::*;
use tally_core::{TallyError, Weighting};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TallyConfig::from_toml("").unwrap();

    // Benchmark defaults
    assert_eq!(config.benchmark.window_days, 14.0);
    assert_eq!(config.benchmark.min_observations, 5);

    // Decay defaults
    assert!(!config.decay.enabled);
    assert_eq!(config.decay.half_life_days, 30.0);
    assert_eq!(config.decay.window_days, 21.0);

    // Aggregation defaults
    assert_eq!(config.aggregation.lookback_days, 14.0);
    assert_eq!(config.aggregation.weighting, Weighting::None);
    assert_eq!(config.aggregation.half_life_days, 7.0);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[decay]
enabled = true
half_life_days = 45.0

[aggregation]
weighting = "exponential"
"#;
    let config = TallyConfig::from_toml(toml).unwrap();
    assert!(config.decay.enabled);
    assert_eq!(config.decay.half_life_days, 45.0);
    // Non-overridden fields keep defaults
    assert_eq!(config.decay.window_days, 21.0);
    assert_eq!(config.aggregation.weighting, Weighting::Exponential);
    assert_eq!(config.aggregation.lookback_days, 14.0);
}

#[test]
fn config_serde_roundtrip() {
    let config = TallyConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = TallyConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.benchmark.window_days, config.benchmark.window_days);
    assert_eq!(roundtripped.aggregation.weighting, config.aggregation.weighting);
}

#[test]
fn unknown_weighting_is_a_parse_error() {
    let err = TallyConfig::from_toml("[aggregation]\nweighting = \"cubic\"\n").unwrap_err();
    assert!(matches!(err, TallyError::ConfigParse(_)));
}

#[test]
fn non_positive_lookback_is_rejected() {
    let err = TallyConfig::from_toml("[aggregation]\nlookback_days = 0.0\n").unwrap_err();
    match err {
        TallyError::InvalidConfig { field, .. } => assert_eq!(field, "aggregation.lookback_days"),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn infinite_decay_half_life_is_accepted() {
    let config = DecayConfig {
        half_life_days: f64::INFINITY,
        ..DecayConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn zero_decay_half_life_is_rejected() {
    let config = DecayConfig {
        half_life_days: 0.0,
        ..DecayConfig::default()
    };
    assert!(config.validate().is_err());
}
