//! Time-decayed house effects.
//!
//! Same per-observation deviations as [`crate::estimator`], aggregated with
//! weight `0.5 ^ (age / half_life)` so a source's recent behavior dominates.
//! Ages are measured from one shared reference instant supplied by the caller.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use tally_core::config::DecayConfig;
use tally_core::config::defaults::{DEFAULT_DECAY_HALF_LIFE_DAYS, DEFAULT_DECAY_WINDOW_DAYS};
use tally_core::errors::TallyResult;
use tally_core::observation::{age_days, latest_timestamp, validate_all};
use tally_core::traits::IBiasEstimator;
use tally_core::{EnhancedHouseEffect, HouseEffectMap, Observation};

use crate::benchmark::BenchmarkPolicy;
use crate::decay::decay_weight;
use crate::estimator::tally_deviations;

#[derive(Debug, Clone)]
pub struct DecayedHouseEffectEstimator {
    half_life_days: f64,
    policy: BenchmarkPolicy,
}

impl DecayedHouseEffectEstimator {
    /// 30-day half-life over a fixed 21-day benchmark window.
    pub fn new() -> Self {
        Self {
            half_life_days: DEFAULT_DECAY_HALF_LIFE_DAYS,
            policy: BenchmarkPolicy::Fixed {
                window_days: DEFAULT_DECAY_WINDOW_DAYS,
            },
        }
    }

    pub fn with_config(config: &DecayConfig) -> Self {
        Self {
            half_life_days: config.half_life_days,
            policy: BenchmarkPolicy::fixed(config),
        }
    }

    /// Custom half-life. `f64::INFINITY` gives uniform weights.
    pub fn with_half_life(mut self, half_life_days: f64) -> Self {
        self.half_life_days = half_life_days;
        self
    }

    /// Replace the benchmark policy.
    pub fn with_policy(mut self, policy: BenchmarkPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn half_life_days(&self) -> f64 {
        self.half_life_days
    }

    /// Recency-weighted effects with decay diagnostics.
    pub fn estimate_enhanced(
        &self,
        observations: &[Observation],
        reference: DateTime<Utc>,
    ) -> BTreeMap<String, EnhancedHouseEffect> {
        let half_life = self.half_life_days;
        let tallies = tally_deviations(observations, &self.policy, |observation| {
            let age = age_days(reference, observation.timestamp);
            (decay_weight(age, half_life), age)
        });

        let effects: BTreeMap<String, EnhancedHouseEffect> = tallies
            .into_iter()
            .filter_map(|(source, tally)| {
                let age = tally.age;
                tally.into_effect(source.clone()).map(|effect| {
                    (
                        source,
                        EnhancedHouseEffect {
                            effect,
                            effective_age_days: age.mean().unwrap_or(0.0),
                            total_weight: age.total_weight(),
                        },
                    )
                })
            })
            .collect();

        debug!(
            observations = observations.len(),
            sources = effects.len(),
            half_life_days = half_life,
            %reference,
            "decayed house effects estimated"
        );
        effects
    }
}

impl Default for DecayedHouseEffectEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl IBiasEstimator for DecayedHouseEffectEstimator {
    fn name(&self) -> &'static str {
        "decayed"
    }

    fn estimate(
        &self,
        observations: &[Observation],
        reference: DateTime<Utc>,
    ) -> TallyResult<HouseEffectMap> {
        validate_all(observations)?;
        Ok(self
            .estimate_enhanced(observations, reference)
            .into_iter()
            .map(|(source, enhanced)| (source, enhanced.into()))
            .collect())
    }
}

/// Decayed effects measured from the latest timestamp in `observations`.
///
/// Empty input yields an empty map.
pub fn estimate_decayed_effects(
    observations: &[Observation],
    half_life_days: f64,
    window_days: f64,
) -> BTreeMap<String, EnhancedHouseEffect> {
    let Some(reference) = latest_timestamp(observations) else {
        return BTreeMap::new();
    };
    DecayedHouseEffectEstimator::new()
        .with_half_life(half_life_days)
        .with_policy(BenchmarkPolicy::Fixed { window_days })
        .estimate_enhanced(observations, reference)
}
