use tally_core::config::AggregationConfig;
use tally_core::{Category, Observation, Weighting};
use tally_aggregate::{apply_corrections, current_estimate, TemporalAggregator};
use test_fixtures::{day, obs};

const TOLERANCE: f64 = 1e-9;

fn ap(source: &str, days: i64, value: f64) -> Observation {
    obs(source, days, &[(Category::Ap, value)])
}

fn aggregator(weighting: Weighting) -> TemporalAggregator {
    TemporalAggregator::with_weighting(14.0, weighting, 7.0)
}

#[test]
fn uniform_weights_give_plain_mean() {
    let panel = vec![ap("A", 10, 25.0), ap("B", 11, 27.0), ap("C", 12, 23.0)];
    let adjusted = apply_corrections(&panel, &Default::default());
    let estimate = current_estimate(&adjusted, &AggregationConfig::default()).unwrap();
    assert_eq!(estimate.categories[&Category::Ap], 25.0);
    assert_eq!(estimate.observation_count, 3);
    assert_eq!(estimate.as_of, day(12));
}

#[test]
fn single_fresh_observation_is_returned_exactly() {
    let panel = vec![obs("A", 3, &[(Category::Ap, 26.3), (Category::Frp, 19.7)])];
    for half_life in [0.5, 7.0, 365.0] {
        let estimate = TemporalAggregator::with_weighting(14.0, Weighting::Exponential, half_life)
            .estimate(&panel)
            .unwrap();
        assert_eq!(estimate.categories[&Category::Ap], 26.3);
        assert_eq!(estimate.categories[&Category::Frp], 19.7);
    }
}

#[test]
fn lookback_excludes_older_observations() {
    let panel = vec![ap("Old", 0, 100.0), ap("A", 20, 24.0), ap("B", 21, 26.0)];
    let estimate = aggregator(Weighting::None).estimate(&panel).unwrap();
    assert_eq!(estimate.observation_count, 2);
    assert_eq!(estimate.categories[&Category::Ap], 25.0);
    assert!(!estimate.contributing_sources.contains("Old"));
}

#[test]
fn lookback_boundary_is_inclusive() {
    let panel = vec![ap("A", 0, 20.0), ap("B", 14, 30.0)];
    let estimate = aggregator(Weighting::None).estimate(&panel).unwrap();
    assert_eq!(estimate.observation_count, 2);
}

#[test]
fn missing_values_do_not_dilute_other_observations() {
    let panel = vec![
        obs("A", 0, &[(Category::Ap, 20.0), (Category::H, 10.0)]),
        obs("B", 1, &[(Category::Ap, 30.0)]),
    ];
    let estimate = aggregator(Weighting::None).estimate(&panel).unwrap();
    assert_eq!(estimate.categories[&Category::H], 10.0);
    assert_eq!(estimate.categories[&Category::Ap], 25.0);
    assert!(!estimate.categories.contains_key(&Category::Sv));
}

#[test]
fn contributing_sources_are_deduplicated() {
    let panel = vec![
        ap("Norstat", 0, 20.0),
        ap("Norstat", 2, 21.0),
        obs("Opinion", 3, &[(Category::H, 22.0)]),
    ];
    let estimate = aggregator(Weighting::None).estimate(&panel).unwrap();
    let sources: Vec<&str> = estimate.contributing_sources.iter().map(String::as_str).collect();
    assert_eq!(sources, vec!["Norstat", "Opinion"]);
}

#[test]
fn linear_weighting() {
    let panel = vec![ap("A", 0, 20.0), ap("B", 7, 30.0)];
    let estimate = aggregator(Weighting::Linear).estimate(&panel).unwrap();
    // Weights 0.5 and 1.0.
    assert!((estimate.categories[&Category::Ap] - 40.0 / 1.5).abs() < TOLERANCE);
}

#[test]
fn quadratic_weighting() {
    let panel = vec![ap("A", 0, 20.0), ap("B", 7, 30.0)];
    let estimate = aggregator(Weighting::Quadratic).estimate(&panel).unwrap();
    // Weights 0.25 and 1.0.
    assert!((estimate.categories[&Category::Ap] - 35.0 / 1.25).abs() < TOLERANCE);
}

#[test]
fn exponential_weighting() {
    let panel = vec![ap("A", 0, 20.0), ap("B", 7, 30.0)];
    let estimate = aggregator(Weighting::Exponential).estimate(&panel).unwrap();
    // Half-life 7: weights 0.5 and 1.0.
    assert!((estimate.categories[&Category::Ap] - 40.0 / 1.5).abs() < TOLERANCE);
}

#[test]
fn zero_weight_category_is_omitted() {
    let panel = vec![
        obs("A", 0, &[(Category::H, 20.0)]),
        obs("B", 14, &[(Category::Ap, 30.0)]),
    ];
    let estimate = aggregator(Weighting::Linear).estimate(&panel).unwrap();
    assert_eq!(estimate.observation_count, 2);
    assert_eq!(estimate.categories.get(&Category::H), None);
    assert_eq!(estimate.categories[&Category::Ap], 30.0);
    assert!(estimate.contributing_sources.contains("A"));
}

#[test]
fn empty_input_has_no_estimate() {
    let empty: Vec<Observation> = Vec::new();
    assert!(aggregator(Weighting::None).estimate(&empty).is_none());
}

#[test]
fn window_description_names_the_scheme() {
    assert_eq!(
        aggregator(Weighting::None).window_description(),
        "last 14 days, none weighting"
    );
    assert_eq!(
        aggregator(Weighting::Exponential).window_description(),
        "last 14 days, exponential weighting, half-life 7 days"
    );
}

#[test]
fn observation_just_before_lookback_is_excluded() {
    let early = Observation::new(
        "Old",
        day(0) - chrono::Duration::milliseconds(900),
        [(Category::Ap, 100.0)],
    );
    let panel = vec![early, ap("A", 14, 20.0)];
    let estimate = aggregator(Weighting::None).estimate(&panel).unwrap();
    assert_eq!(estimate.observation_count, 1);
    assert_eq!(estimate.categories[&Category::Ap], 20.0);
}
