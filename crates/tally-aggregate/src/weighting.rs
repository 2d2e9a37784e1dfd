use tally_core::Weighting;

/// Weight of an observation `age_days` old inside a `lookback_days` window.
///
/// | scheme      | weight                                    |
/// |-------------|-------------------------------------------|
/// | none        | 1                                         |
/// | linear      | `max(0, (lookback - age) / lookback)`     |
/// | exponential | `0.5 ^ (age / half_life)`                 |
/// | quadratic   | `linear²`                                 |
pub fn recency_weight(
    weighting: Weighting,
    age_days: f64,
    lookback_days: f64,
    half_life_days: f64,
) -> f64 {
    match weighting {
        Weighting::None => 1.0,
        Weighting::Linear => linear(age_days, lookback_days),
        Weighting::Exponential => tally_house::decay_weight(age_days, half_life_days),
        Weighting::Quadratic => linear(age_days, lookback_days).powi(2),
    }
}

fn linear(age_days: f64, lookback_days: f64) -> f64 {
    ((lookback_days - age_days) / lookback_days).max(0.0)
}
