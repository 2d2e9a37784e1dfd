//! Recency weight math shared by the decayed estimator.

/// Recency weight `0.5 ^ (age / half_life)`.
///
/// Range: (0.0, 1.0]. An infinite half-life returns 1.0 (no decay).
pub fn decay_weight(age_days: f64, half_life_days: f64) -> f64 {
    if half_life_days.is_infinite() {
        return 1.0;
    }
    0.5_f64.powf(age_days.max(0.0) / half_life_days)
}

/// Running weighted mean.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedMean {
    weighted_sum: f64,
    total_weight: f64,
}

impl WeightedMean {
    pub fn push(&mut self, value: f64, weight: f64) {
        self.weighted_sum += value * weight;
        self.total_weight += weight;
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// `None` until some positive weight has been pushed.
    pub fn mean(&self) -> Option<f64> {
        (self.total_weight > 0.0).then(|| self.weighted_sum / self.total_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_life_halves_the_weight() {
        assert_eq!(decay_weight(0.0, 30.0), 1.0);
        assert!((decay_weight(30.0, 30.0) - 0.5).abs() < 1e-12);
        assert!((decay_weight(60.0, 30.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn infinite_half_life_never_decays() {
        assert_eq!(decay_weight(10_000.0, f64::INFINITY), 1.0);
    }

    #[test]
    fn empty_mean_is_none() {
        assert_eq!(WeightedMean::default().mean(), None);
    }

    #[test]
    fn weighted_mean_of_recency_weighted_deviations() {
        let mut mean = WeightedMean::default();
        for (deviation, age) in [(4.0, 0.0), (2.0, 30.0), (2.0, 60.0)] {
            mean.push(deviation, decay_weight(age, 30.0));
        }
        let expected = (4.0 + 0.5 * 2.0 + 0.25 * 2.0) / 1.75;
        assert!((mean.mean().unwrap() - expected).abs() < 1e-12);
        assert!((mean.mean().unwrap() - 3.142857).abs() < 1e-6);
        assert!((mean.total_weight() - 1.75).abs() < 1e-12);
    }
}
